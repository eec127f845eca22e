//! Vector property commands: update, rename, render mode, display text
//!
//! `updateVector` does the work; the others run it through the engine so
//! the history shows both calls.

use vecviz_math::Vec3;
use vecviz_scene::{Entity, RenderMode, VectorEntity, VectorOptions};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
use crate::commands::{color_argument, require_vector};
use crate::error::CmdResult;

/// Register vector property commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(UpdateVectorCommand)?;
    table.register(RenameVectorCommand)?;
    table.register(SetVectorRenderModeCommand)?;
    table.register(SetVectorDisplayTextCommand)?;
    table.register(ShowVectorDisplayTextCommand)?;
    Ok(())
}

// ============================================================================
// updateVector command
// ============================================================================

struct UpdateVectorCommand;

impl Command for UpdateVectorCommand {
    fn name(&self) -> &str {
        "updateVector"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::INTERNAL
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::optional("newVectorName", ArgType::String),
            ArgDef::optional("textToRender", ArgType::String),
            ArgDef::optional("originX", ArgType::Float),
            ArgDef::optional("originY", ArgType::Float),
            ArgDef::optional("originZ", ArgType::Float),
            ArgDef::optional("endX", ArgType::Float),
            ArgDef::optional("endY", ArgType::Float),
            ArgDef::optional("endZ", ArgType::Float),
            ArgDef::optional("color", ArgType::Int),
            ArgDef::optional("renderMode", ArgType::String),
            ArgDef::optional("renderText", ArgType::Bool),
            ArgDef::optional("visible", ArgType::Bool),
            ArgDef::optional("scaleVector", ArgType::Vec3),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let vector = require_vector(ctx, args, "vector")?;
        let old_name = vector.name();
        let new_name = args.optional_str("newVectorName")?.unwrap_or(old_name);

        let start = Vec3::new(
            args.optional_f64("originX")?.unwrap_or(vector.start.x),
            args.optional_f64("originY")?.unwrap_or(vector.start.y),
            args.optional_f64("originZ")?.unwrap_or(vector.start.z),
        );
        let end = Vec3::new(
            args.optional_f64("endX")?.unwrap_or(vector.end.x),
            args.optional_f64("endY")?.unwrap_or(vector.end.y),
            args.optional_f64("endZ")?.unwrap_or(vector.end.z),
        );
        let render_mode = match args.optional_str("renderMode")? {
            Some(mode) => mode.parse::<RenderMode>()?,
            None => vector.render_mode,
        };

        // A label that showed the old name keeps showing the name
        let mut text = args
            .optional_str("textToRender")?
            .unwrap_or(&vector.text_to_render);
        if text == old_name {
            text = new_name;
        }

        let opts = VectorOptions {
            color: Some(color_argument(args)?.unwrap_or(vector.color)),
            render_mode: Some(render_mode),
            render_text: Some(args.optional_bool("renderText")?.unwrap_or(vector.render_text)),
            text_to_render: Some(text.to_string()),
            visible: Some(args.optional_bool("visible")?.unwrap_or(vector.visible)),
            scale: Some(args.optional_vec3("scaleVector")?.unwrap_or(vector.scale)),
            basis_a: vector.basis_a.clone(),
            basis_b: vector.basis_b.clone(),
        };

        let updated = VectorEntity::with_options(new_name, start, end, opts);
        let scene = ctx.scene_mut();
        scene.replace_vector(old_name, updated)?;
        scene.request_menu_refresh();
        Ok(Value::String(new_name.to_string()))
    }
}

// ============================================================================
// renameVector command
// ============================================================================

struct RenameVectorCommand;

impl Command for RenameVectorCommand {
    fn name(&self) -> &str {
        "renameVector"
    }

    fn description(&self) -> &str {
        "Renames a vector.  The input name will be used to reference the vector."
    }

    fn example_usage(&self) -> &str {
        "renameVector(\"oldVectorName\", \"newVectorName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("oldVectorName", ArgType::String),
            ArgDef::required("newVectorName", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let update = CommandArgs::new()
            .with("vector", args.require_str("oldVectorName")?)
            .with("newVectorName", args.require_str("newVectorName")?);
        ctx.execute("updateVector", update)
    }
}

// ============================================================================
// setVectorRenderMode command
// ============================================================================

struct SetVectorRenderModeCommand;

impl Command for SetVectorRenderModeCommand {
    fn name(&self) -> &str {
        "setVectorRenderMode"
    }

    fn description(&self) -> &str {
        "Sets a vector's render mode.  Valid input render modes are \"vector\", \"waypoint\", \"line\", \"dashedLine\", \"man\", \"dog\", \"spaceship\", \"triangle\", \"box\", \"torus\", and \"plane\"."
    }

    fn example_usage(&self) -> &str {
        "setVectorRenderMode(\"vectorName\", \"renderMode\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("renderMode", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let update = CommandArgs::new()
            .with("vector", args.require_str("vector")?)
            .with("renderMode", args.require_str("renderMode")?);
        ctx.execute("updateVector", update)
    }
}

// ============================================================================
// setVectorDisplayText / showVectorDisplayText commands
// ============================================================================

struct SetVectorDisplayTextCommand;

impl Command for SetVectorDisplayTextCommand {
    fn name(&self) -> &str {
        "setVectorDisplayText"
    }

    fn description(&self) -> &str {
        "Sets a vector's display text and turns the text on."
    }

    fn example_usage(&self) -> &str {
        "setVectorDisplayText(\"vectorName\", \"textToDisplay\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("textToDisplay", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let update = CommandArgs::new()
            .with("vector", args.require_str("vector")?)
            .with("renderText", true)
            .with("textToRender", args.require_str("textToDisplay")?);
        ctx.execute("updateVector", update)
    }
}

struct ShowVectorDisplayTextCommand;

impl Command for ShowVectorDisplayTextCommand {
    fn name(&self) -> &str {
        "showVectorDisplayText"
    }

    fn description(&self) -> &str {
        "Controls whether or not the vector's display text will be drawn in the scene.  The input parameter \"displayTextEnabled\" should be either true or false."
    }

    fn example_usage(&self) -> &str {
        "showVectorDisplayText(\"vectorName\", displayTextEnabled)"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("vector", ArgType::String),
            ArgDef::required("displayTextEnabled", ArgType::Bool),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let update = CommandArgs::new()
            .with("vector", args.require_str("vector")?)
            .with("renderText", args.require_bool("displayTextEnabled")?);
        ctx.execute("updateVector", update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmdError;
    use crate::executor::CommandEngine;

    fn engine_with_up_and_left() -> CommandEngine {
        let engine = CommandEngine::new().unwrap();
        for (name, end) in [("up", Vec3::y()), ("left", Vec3::x())] {
            engine
                .execute(
                    "createVector2",
                    CommandArgs::new().with("name", name).with("endPosition", end),
                )
                .unwrap();
        }
        engine
    }

    #[test]
    fn test_rename_keeps_slot_and_records_two_entries() {
        let engine = engine_with_up_and_left();
        let before = engine.history().len();
        engine
            .execute(
                "renameVector",
                CommandArgs::new()
                    .with("oldVectorName", "up")
                    .with("newVectorName", "vertical"),
            )
            .unwrap();

        let history = engine.history();
        assert_eq!(history.len(), before + 2);
        assert_eq!(history[before].cmd_name, "updateVector");
        assert_eq!(history[before + 1].cmd_name, "renameVector");
        drop(history);

        let scene = engine.scene();
        assert!(!scene.vectors.contains("up"));
        let renamed = scene.vectors.get("$-1").unwrap();
        assert_eq!(renamed.name(), "vertical");
        assert_eq!(renamed.text_to_render, "vertical");
    }

    #[test]
    fn test_rename_onto_taken_name_changes_nothing() {
        let engine = engine_with_up_and_left();
        let result = engine
            .execute(
                "renameVector",
                CommandArgs::new()
                    .with("oldVectorName", "up")
                    .with("newVectorName", "left"),
            )
            .unwrap();
        assert_eq!(
            result.as_str(),
            Some("A vector named \"left\" already exists.  Please choose a new name.")
        );
        let scene = engine.scene();
        assert_eq!(scene.vectors.names().collect::<Vec<_>>(), vec!["up", "left"]);
    }

    #[test]
    fn test_render_mode_and_text() {
        let engine = engine_with_up_and_left();
        engine
            .execute(
                "setVectorRenderMode",
                CommandArgs::new().with("vector", "up").with("renderMode", "dashedLine"),
            )
            .unwrap();
        engine
            .execute(
                "setVectorDisplayText",
                CommandArgs::new().with("vector", "up").with("textToDisplay", "north"),
            )
            .unwrap();

        let scene = engine.scene();
        let up = scene.vectors.get("up").unwrap();
        assert_eq!(up.render_mode, RenderMode::DashedLine);
        assert!(up.render_text);
        assert_eq!(up.text_to_render, "north");
    }

    #[test]
    fn test_unknown_render_mode_is_an_error() {
        let engine = engine_with_up_and_left();
        assert!(engine
            .execute(
                "setVectorRenderMode",
                CommandArgs::new().with("vector", "up").with("renderMode", "blimp"),
            )
            .is_err());
    }

    #[test]
    fn test_update_moves_endpoints() {
        let engine = engine_with_up_and_left();
        engine
            .execute(
                "updateVector",
                CommandArgs::new().with("vector", "left").with("endY", 2.0).with("color", 0x123456),
            )
            .unwrap();
        let scene = engine.scene();
        let left = scene.vectors.get("left").unwrap();
        assert_eq!(left.end, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(left.color, 0x123456);
    }

    #[test]
    fn test_update_rejects_out_of_range_color() {
        let engine = engine_with_up_and_left();
        let before = engine.scene().vectors.get("left").unwrap().color;
        for color in [0x100_0000_i64, -1, 0x1_0012_3456] {
            let err = engine
                .execute(
                    "updateVector",
                    CommandArgs::new().with("vector", "left").with("color", color),
                )
                .unwrap_err();
            assert!(matches!(err, CmdError::InvalidArgument { ref name, .. } if name == "color"));
        }
        assert_eq!(engine.scene().vectors.get("left").unwrap().color, before);
        assert!(engine
            .history()
            .iter()
            .all(|entry| entry.cmd_name != "updateVector"));
    }
}
