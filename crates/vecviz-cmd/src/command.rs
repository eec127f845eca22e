//! Command trait and table
//!
//! Defines the interface for commands, their metadata, and the table that
//! maps names to implementations.

use std::sync::Arc;

use ahash::AHashMap;
use serde::Serialize;
use vecviz_scene::SceneContext;

use crate::args::{ArgDef, CommandArgs, Value};
use crate::error::{CmdError, CmdResult};
use crate::executor::{dispatch, EngineState};
use crate::history::{CommandHistory, HistoryEntry};

/// Largest argument schema the expression bridge can bind positionally
pub const MAX_ARGS: usize = 16;

/// Where a command is offered and how its result is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandProperties {
    /// Listed by `listCommands` and callable by name from the terminal
    pub available_in_terminal: bool,
    /// Echo the call and its result to the console when invoked from a
    /// non-terminal surface
    pub output_result_to_console: bool,
}

impl CommandProperties {
    /// Internal helper command
    pub const INTERNAL: Self = Self {
        available_in_terminal: false,
        output_result_to_console: false,
    };

    /// Terminal command
    pub const TERMINAL: Self = Self {
        available_in_terminal: true,
        output_result_to_console: false,
    };

    /// Terminal command whose result is echoed
    pub const CONSOLE: Self = Self {
        available_in_terminal: true,
        output_result_to_console: true,
    };
}

/// Command metadata for front-ends (menus, completion, help)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    pub example_usage: String,
    pub properties: CommandProperties,
    pub args: Vec<String>,
}

/// Command execution context
///
/// Gives a handler the scene and the history, and lets it run other
/// commands through the engine so they are recorded like any other call.
pub struct CommandContext<'a> {
    state: &'a mut EngineState,
    table: &'a CommandTable,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(state: &'a mut EngineState, table: &'a CommandTable) -> Self {
        Self { state, table }
    }

    pub fn scene(&self) -> &SceneContext {
        &self.state.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneContext {
        &mut self.state.scene
    }

    pub fn history(&self) -> &CommandHistory {
        &self.state.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.state.history
    }

    pub fn table(&self) -> &CommandTable {
        self.table
    }

    /// Run another command; it gets its own history entry, ahead of the
    /// caller's
    pub fn execute(&mut self, name: &str, args: CommandArgs) -> CmdResult<Value> {
        dispatch(self.table, self.state, name, args, false)
    }

    /// Replay a command list in order, stopping at the first error
    ///
    /// Like a JSON replay on the engine, commands that ask for it are
    /// echoed to the console.
    pub fn execute_list(&mut self, entries: &[HistoryEntry]) -> CmdResult<Vec<Value>> {
        entries
            .iter()
            .map(|entry| dispatch(self.table, self.state, &entry.cmd_name, entry.cmd_args.clone(), true))
            .collect()
    }

    /// Print a message
    pub fn print(&self, msg: &str) {
        log::info!("{}", msg);
    }
}

/// Trait for command implementations
///
/// Handlers receive the context and validated arguments and return a
/// result value. A handler that cannot find an entity returns the scene
/// error; the engine turns lookup failures into a user-facing string.
pub trait Command: Send + Sync {
    /// Get the command name
    fn name(&self) -> &str;

    /// Execute the command
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &CommandArgs) -> CmdResult<Value>;

    /// One-paragraph description used by `help`
    fn description(&self) -> &str {
        ""
    }

    /// Example call used by `help`
    fn example_usage(&self) -> &str {
        ""
    }

    fn properties(&self) -> CommandProperties {
        CommandProperties::TERMINAL
    }

    /// Ordered argument schema
    fn args(&self) -> &[ArgDef] {
        &[]
    }

    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            example_usage: self.example_usage().to_string(),
            properties: self.properties(),
            args: self.args().iter().map(|a| a.name.to_string()).collect(),
        }
    }
}

/// Table mapping command names to implementations
#[derive(Default)]
pub struct CommandTable {
    commands: AHashMap<String, Arc<dyn Command>>,
}

impl CommandTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with all built-in commands registered
    pub fn with_builtins() -> CmdResult<Self> {
        let mut table = Self::new();
        crate::commands::register_all(&mut table)?;
        Ok(table)
    }

    /// Register a command, replacing any earlier one with the same name
    pub fn register<C: Command + 'static>(&mut self, cmd: C) -> CmdResult<()> {
        self.register_arc(Arc::new(cmd))
    }

    /// Register a shared command
    pub fn register_arc(&mut self, cmd: Arc<dyn Command>) -> CmdResult<()> {
        validate_definition(cmd.as_ref())?;
        let name = cmd.name().to_string();
        if self.commands.insert(name.clone(), cmd).is_some() {
            log::debug!("command '{}' re-registered", name);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// All command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Metadata for every command, sorted by name
    pub fn infos(&self) -> Vec<CommandInfo> {
        self.names()
            .into_iter()
            .filter_map(|name| self.commands.get(name))
            .map(|cmd| cmd.info())
            .collect()
    }

    /// Terminal-available command names, sorted, one per line
    pub fn terminal_listing(&self) -> String {
        self.names()
            .into_iter()
            .filter(|name| {
                self.commands
                    .get(*name)
                    .is_some_and(|cmd| cmd.properties().available_in_terminal)
            })
            .collect::<Vec<_>>()
            .join("\r\n")
    }

    /// Help text for one command
    pub fn help(&self, name: &str) -> String {
        match self.commands.get(name) {
            None => format!("{} is not a valid command.", name),
            Some(cmd) if cmd.description().is_empty() => format!(
                "Additional details about the command, \"{}\", have not yet been specified.",
                name
            ),
            Some(cmd) => format!(
                "{}\r\nExample Usage: {}",
                cmd.description(),
                cmd.example_usage()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.remove(name)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration-time checks on a command definition
fn validate_definition(cmd: &dyn Command) -> CmdResult<()> {
    let name = cmd.name();
    if !is_identifier(name) {
        return Err(CmdError::schema(name, "name must be an identifier"));
    }

    let args = cmd.args();
    if args.len() > MAX_ARGS {
        return Err(CmdError::schema(
            name,
            format!("at most {} arguments are supported", MAX_ARGS),
        ));
    }

    let mut seen_optional = false;
    for (i, def) in args.iter().enumerate() {
        if !is_identifier(def.name) {
            return Err(CmdError::schema(
                name,
                format!("argument name '{}' must be an identifier", def.name),
            ));
        }
        if args[..i].iter().any(|d| d.name == def.name) {
            return Err(CmdError::schema(
                name,
                format!("duplicate argument '{}'", def.name),
            ));
        }
        if def.required && seen_optional {
            return Err(CmdError::schema(
                name,
                format!("required argument '{}' follows an optional one", def.name),
            ));
        }
        seen_optional |= !def.required;
    }
    Ok(())
}
