//! Matrix property commands

use vecviz_scene::{Entity, MatrixEntity, MatrixOptions};

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
use crate::commands::require_matrix;
use crate::error::CmdResult;

/// Register matrix property commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(UpdateMatrixCommand)?;
    table.register(RenameMatrixCommand)?;
    Ok(())
}

// ============================================================================
// updateMatrix command
// ============================================================================

struct UpdateMatrixCommand;

impl Command for UpdateMatrixCommand {
    fn name(&self) -> &str {
        "updateMatrix"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::INTERNAL
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("oldMatrixName", ArgType::String),
            ArgDef::optional("newMatrixName", ArgType::String),
            ArgDef::optional("matrix", ArgType::Matrix),
            ArgDef::optional("visible", ArgType::Bool),
            ArgDef::optional("renderText", ArgType::Bool),
            ArgDef::optional("textToRender", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let current = require_matrix(ctx, args, "oldMatrixName")?;
        let old_name = current.name();
        let new_name = args.optional_str("newMatrixName")?.unwrap_or(old_name);

        let mut text = args
            .optional_str("textToRender")?
            .unwrap_or(&current.text_to_render);
        if text == old_name {
            text = new_name;
        }

        let opts = MatrixOptions {
            visible: Some(args.optional_bool("visible")?.unwrap_or(current.visible)),
            render_text: Some(args.optional_bool("renderText")?.unwrap_or(current.render_text)),
            text_to_render: Some(text.to_string()),
        };
        let matrix = args.optional_mat4("matrix")?.unwrap_or(current.matrix);

        let scene = ctx.scene_mut();
        scene.replace_matrix(old_name, MatrixEntity::with_options(new_name, matrix, opts))?;
        scene.request_menu_refresh();
        Ok(Value::String(new_name.to_string()))
    }
}

// ============================================================================
// renameMatrix command
// ============================================================================

struct RenameMatrixCommand;

impl Command for RenameMatrixCommand {
    fn name(&self) -> &str {
        "renameMatrix"
    }

    fn description(&self) -> &str {
        "Renames a matrix.  The input name will be used to reference the matrix."
    }

    fn example_usage(&self) -> &str {
        "renameMatrix(\"oldMatrixName\", \"newMatrixName\")"
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[
            ArgDef::required("oldMatrixName", ArgType::String),
            ArgDef::required("newMatrixName", ArgType::String),
        ];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        let update = CommandArgs::new()
            .with("oldMatrixName", args.require_str("oldMatrixName")?)
            .with("newMatrixName", args.require_str("newMatrixName")?);
        ctx.execute("updateMatrix", update)
    }
}
