//! Scene settings commands
//!
//! Settings are addressed by their camelCase names, e.g. `showGrid` or
//! `backgroundColor`.

use vecviz_scene::SceneSettings;

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
use crate::error::{CmdError, CmdResult};

/// Register settings commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(SetSceneSettingCommand)?;
    table.register(GetSceneSettingCommand)?;
    table.register(ResetSceneSettingsCommand)?;
    Ok(())
}

struct SetSceneSettingCommand;

impl Command for SetSceneSettingCommand {
    fn name(&self) -> &str {
        "setSceneSetting"
    }

    fn description(&self) -> &str {
        "Changes one scene setting, such as \"showGrid\" or \"backgroundColor\".  The value must match the setting's type."
    }

    fn example_usage(&self) -> &str {
        "setSceneSetting(\"showGrid\", false)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("name", ArgType::String),
            ArgDef::required("value", ArgType::Any),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let name = args.require_str("name")?;
        let value = args
            .get("value")
            .ok_or_else(|| CmdError::MissingArgument("value".to_string()))?;
        let json = serde_json::to_value(value).map_err(|e| CmdError::invalid_arg("value", e.to_string()))?;
        ctx.scene_mut().settings.set_by_name(name, json)?;
        Ok(value.clone())
    }
}

struct GetSceneSettingCommand;

impl Command for GetSceneSettingCommand {
    fn name(&self) -> &str {
        "getSceneSetting"
    }

    fn description(&self) -> &str {
        "Returns the current value of one scene setting."
    }

    fn example_usage(&self) -> &str {
        "getSceneSetting(\"backgroundColor\")"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::CONSOLE
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("name", ArgType::String)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let json = ctx.scene().settings.get_by_name(args.require_str("name")?)?;
        serde_json::from_value(json).map_err(|e| CmdError::evaluation(e.to_string()))
    }
}

struct ResetSceneSettingsCommand;

impl Command for ResetSceneSettingsCommand {
    fn name(&self) -> &str {
        "resetSceneSettings"
    }

    fn description(&self) -> &str {
        "Restores every scene setting to its default value."
    }

    fn example_usage(&self) -> &str {
        "resetSceneSettings()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        ctx.scene_mut().settings = SceneSettings::default();
        Ok(Value::None)
    }
}
