//! Meta commands: listing, help and the command history

use crate::args::{ArgDef, ArgType, CommandArgs, Value};
use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
use crate::error::CmdResult;
use crate::history::CommandHistory;

/// Register meta commands
pub fn register(table: &mut CommandTable) -> CmdResult<()> {
    table.register(ListCommandsCommand)?;
    table.register(GetCommandHistoryCommand)?;
    table.register(ClearCommandHistoryCommand)?;
    table.register(RunJsonCommandListCommand)?;
    table.register(HelpCommand)?;
    Ok(())
}

// ============================================================================
// listCommands command
// ============================================================================

struct ListCommandsCommand;

impl Command for ListCommandsCommand {
    fn name(&self) -> &str {
        "listCommands"
    }

    fn description(&self) -> &str {
        "Lists all commands available within the terminal."
    }

    fn example_usage(&self) -> &str {
        "listCommands()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::String(ctx.table().terminal_listing()))
    }
}

// ============================================================================
// getCommandHistory / clearCommandHistory / runJsonCommandList commands
// ============================================================================

struct GetCommandHistoryCommand;

impl Command for GetCommandHistoryCommand {
    fn name(&self) -> &str {
        "getCommandHistory"
    }

    fn description(&self) -> &str {
        "Returns the recorded commands history in JSON format.  The returned JSON can be used to replay the sequence of commands by pasting the JSON into the Execute Commands menu."
    }

    fn example_usage(&self) -> &str {
        "getCommandHistory()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::String(ctx.history().to_json()?))
    }
}

struct ClearCommandHistoryCommand;

impl Command for ClearCommandHistoryCommand {
    fn name(&self) -> &str {
        "clearCommandHistory"
    }

    fn description(&self) -> &str {
        "Clears the recorded command history."
    }

    fn example_usage(&self) -> &str {
        "clearCommandHistory()"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> CmdResult<Value> {
        ctx.history_mut().clear();
        Ok(Value::from("The command history has been cleared."))
    }
}

struct RunJsonCommandListCommand;

impl Command for RunJsonCommandListCommand {
    fn name(&self) -> &str {
        "runJsonCommandList"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::INTERNAL
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("commandList", ArgType::String)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        // Parse everything before running anything
        let entries = CommandHistory::parse_json(args.require_str("commandList")?)?;
        log::debug!("replaying {} commands", entries.len());
        Ok(Value::List(ctx.execute_list(&entries)?))
    }
}

// ============================================================================
// help command
// ============================================================================

struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::INTERNAL
    }

    fn args(&self) -> &[ArgDef] {
        static ARGS: &[ArgDef] = &[ArgDef::required("commandName", ArgType::String)];
        ARGS
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value> {
        Ok(Value::String(ctx.table().help(args.require_str("commandName")?)))
    }
}
