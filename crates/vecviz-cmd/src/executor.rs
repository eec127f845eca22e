//! Command engine
//!
//! Dispatches commands by name, records history, replays command lists and
//! evaluates expression text through the bridge.

use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use std::rc::Rc;

use vecviz_scene::SceneContext;

use crate::args::{ArgDef, CommandArgs, Value};
use crate::bridge::ExpressionBridge;
use crate::command::{Command, CommandContext, CommandTable};
use crate::console::{BufferConsole, ConsoleSink};
use crate::error::{CmdError, CmdResult};
use crate::history::{CommandHistory, HistoryEntry};
use crate::logger::CommandLogger;

/// Everything a dispatch mutates
pub(crate) struct EngineState {
    pub(crate) scene: SceneContext,
    pub(crate) history: CommandHistory,
    pub(crate) console: Box<dyn ConsoleSink>,
    pub(crate) logger: CommandLogger,
}

/// Command engine
///
/// Owns the command table, the scene and the history, and binds every
/// command into an [`ExpressionBridge`].
pub struct CommandEngine {
    table: Rc<RefCell<CommandTable>>,
    state: Rc<RefCell<EngineState>>,
    bridge: ExpressionBridge,
}

impl CommandEngine {
    /// Engine with built-in commands over a headless scene
    pub fn new() -> CmdResult<Self> {
        Self::with_scene(SceneContext::headless())
    }

    /// Engine with built-in commands over the given scene
    pub fn with_scene(scene: SceneContext) -> CmdResult<Self> {
        Self::with_parts(
            CommandTable::with_builtins()?,
            scene,
            Box::new(BufferConsole::new()),
        )
    }

    pub fn with_parts(
        table: CommandTable,
        scene: SceneContext,
        console: Box<dyn ConsoleSink>,
    ) -> CmdResult<Self> {
        let names: Vec<String> = table.names().into_iter().map(String::from).collect();
        let mut engine = Self {
            table: Rc::new(RefCell::new(table)),
            state: Rc::new(RefCell::new(EngineState {
                scene,
                history: CommandHistory::new(),
                console,
                logger: CommandLogger::new(),
            })),
            bridge: ExpressionBridge::new(),
        };
        for name in &names {
            engine.bind_command(name);
        }
        log::debug!("command engine ready with {} commands", names.len());
        Ok(engine)
    }

    /// Register a command and bind it into the bridge
    ///
    /// Replaces any command, and any binding, of the same name.
    pub fn register<C: Command + 'static>(&mut self, cmd: C) -> CmdResult<()> {
        let name = cmd.name().to_string();
        self.table
            .try_borrow_mut()
            .map_err(|_| engine_busy())?
            .register(cmd)?;
        self.bind_command(&name);
        Ok(())
    }

    fn bind_command(&mut self, name: &str) {
        let table = Rc::clone(&self.table);
        let state = Rc::clone(&self.state);
        let cmd_name = name.to_string();
        self.bridge.bind(name, move |positional| {
            call_positional(&table, &state, &cmd_name, positional)
        });
    }

    /// Execute a command by name
    ///
    /// Unknown names yield `"<name> is an invalid command."` and record
    /// nothing.
    pub fn execute(&self, name: &str, args: CommandArgs) -> CmdResult<Value> {
        self.run(name, args, false)
    }

    /// Execute a command invoked from a menu or other non-terminal surface
    ///
    /// Commands that ask for it have their call and result echoed to the
    /// console.
    pub fn execute_from_surface(&self, name: &str, args: CommandArgs) -> CmdResult<Value> {
        self.run(name, args, true)
    }

    fn run(&self, name: &str, args: CommandArgs, from_surface: bool) -> CmdResult<Value> {
        let table = self.table.try_borrow().map_err(|_| engine_busy())?;
        let mut state = self.state.try_borrow_mut().map_err(|_| engine_busy())?;
        dispatch(&table, &mut state, name, args, from_surface)
    }

    /// Execute entries in order, stopping at the first error
    pub fn execute_cmd_list(&self, entries: &[HistoryEntry]) -> CmdResult<Vec<Value>> {
        entries
            .iter()
            .map(|entry| self.execute(&entry.cmd_name, entry.cmd_args.clone()))
            .collect()
    }

    /// Parse a JSON command list, then replay it
    ///
    /// A parse failure executes nothing. Replay is a surface call: commands
    /// that ask for it have their call and result echoed to the console.
    pub fn execute_json_cmd_list(&self, json: &str) -> CmdResult<Vec<Value>> {
        let entries = CommandHistory::parse_json(json)?;
        entries
            .iter()
            .map(|entry| self.run(&entry.cmd_name, entry.cmd_args.clone(), true))
            .collect()
    }

    /// Evaluate expression text
    pub fn evaluate(&mut self, text: &str) -> CmdResult<Value> {
        self.bridge.evaluate(text)
    }

    /// Evaluate a script file
    pub fn run_script(&mut self, path: &Path) -> CmdResult<Value> {
        let text = std::fs::read_to_string(path)?;
        log::info!("Running script {:?}", path);
        self.evaluate(&text)
    }

    pub fn bridge(&self) -> &ExpressionBridge {
        &self.bridge
    }

    /// Live view of the history
    pub fn history(&self) -> Ref<'_, [HistoryEntry]> {
        Ref::map(self.state.borrow(), |s| s.history.entries())
    }

    /// History as a JSON command list
    pub fn history_json(&self) -> CmdResult<String> {
        self.state.borrow().history.to_json()
    }

    pub fn clear_history(&self) {
        self.state.borrow_mut().history.clear();
    }

    pub fn scene(&self) -> Ref<'_, SceneContext> {
        Ref::map(self.state.borrow(), |s| &s.scene)
    }

    pub fn scene_mut(&self) -> RefMut<'_, SceneContext> {
        RefMut::map(self.state.borrow_mut(), |s| &mut s.scene)
    }

    /// Poll-and-clear the menu refresh flag
    pub fn take_menu_refresh(&self) -> bool {
        self.state.borrow_mut().scene.take_menu_refresh()
    }

    pub fn table(&self) -> Ref<'_, CommandTable> {
        self.table.borrow()
    }

    pub fn help(&self, name: &str) -> String {
        self.table.borrow().help(name)
    }

    pub fn set_console(&self, console: Box<dyn ConsoleSink>) {
        self.state.borrow_mut().console = console;
    }

    /// Start appending recorded commands to a file
    pub fn log_open(&self, path: &Path) -> CmdResult<()> {
        self.state.borrow_mut().logger.log_open(path)
    }

    pub fn log_close(&self) -> CmdResult<()> {
        self.state.borrow_mut().logger.log_close()
    }
}

fn engine_busy() -> CmdError {
    CmdError::evaluation("the command engine is already running a command")
}

fn invalid_command(name: &str) -> Value {
    Value::String(format!("{} is an invalid command.", name))
}

/// Map positional bridge arguments onto the command's schema
fn call_positional(
    table: &RefCell<CommandTable>,
    state: &RefCell<EngineState>,
    name: &str,
    positional: Vec<Value>,
) -> CmdResult<Value> {
    let table = table.try_borrow().map_err(|_| engine_busy())?;
    let Some(command) = table.get(name) else {
        return Ok(invalid_command(name));
    };

    let defs = command.args();
    if positional.len() > defs.len() {
        return Err(CmdError::evaluation(format!(
            "{} takes at most {} arguments but {} were given",
            name,
            defs.len(),
            positional.len()
        )));
    }
    let args: CommandArgs = defs
        .iter()
        .zip(positional)
        .filter(|(_, value)| !value.is_none())
        .map(|(def, value)| (def.name, value))
        .collect();

    let mut state = state.try_borrow_mut().map_err(|_| engine_busy())?;
    dispatch(&table, &mut state, name, args, false)
}

/// Run one command and record it
///
/// Inner commands run by a handler are recorded before the handler's own
/// entry. Lookup failures inside a handler become the result string; every
/// other error propagates and records nothing.
pub(crate) fn dispatch(
    table: &CommandTable,
    state: &mut EngineState,
    name: &str,
    args: CommandArgs,
    from_surface: bool,
) -> CmdResult<Value> {
    let Some(command) = table.get(name) else {
        log::debug!("'{}' is not a registered command", name);
        return Ok(invalid_command(name));
    };

    let args = args.validate(command.args())?;
    log::debug!("dispatch {}", name);

    let result = match command.execute(&mut CommandContext::new(state, table), &args) {
        Ok(value) => value,
        Err(CmdError::Scene(e)) if e.is_lookup_failure() => {
            log::warn!("{}: {}", name, e);
            Value::String(e.to_string())
        }
        Err(e) => return Err(e),
    };

    let call = format_call(name, command.args(), &args);
    let entry = HistoryEntry::new(name, args);
    state.logger.log(&entry, &call);
    state.history.push(entry);

    if from_surface && command.properties().output_result_to_console {
        state.console.print_input(&call);
        state.console.print_output(&result.to_string());
        state.console.prompt();
    }

    Ok(result)
}

/// Canonical call expression: schema order, trailing absent optionals
/// dropped, inner absent ones written as `()`
pub fn format_call(name: &str, defs: &[ArgDef], args: &CommandArgs) -> String {
    let used = defs
        .iter()
        .rposition(|def| args.contains(def.name))
        .map_or(0, |i| i + 1);
    let parts: Vec<String> = defs[..used]
        .iter()
        .map(|def| args.get(def.name).map_or_else(|| "()".to_string(), Value::to_literal))
        .collect();
    format!("{}({})", name, parts.join(", "))
}
