//! vecviz Command System
//!
//! This crate provides the command table, dispatch, history and expression
//! layer for vecviz.
//!
//! # Overview
//!
//! Every user-visible operation is a named command with a typed argument
//! schema. Commands can be run:
//! - by name with named arguments ([`CommandEngine::execute`])
//! - from a JSON command list, e.g. an exported history
//! - as function calls inside expression text, with variables and literals
//!
//! Each successful call appends one entry to the command history; commands
//! that run other commands record those calls first.
//!
//! # Example
//!
//! ```rust,ignore
//! use vecviz_cmd::CommandEngine;
//!
//! let mut engine = CommandEngine::new()?;
//! engine.evaluate("createVector2(\"a\", [1, 0, 0])")?;
//! engine.evaluate("createVector2(\"b\", [0, 1, 0])")?;
//! engine.evaluate("crossProduct(\"a\", \"b\")")?;
//! println!("{}", engine.history_json()?);
//! ```
//!
//! # Architecture
//!
//! - **Value / CommandArgs**: dynamic argument values and name-keyed arguments
//! - **Command trait**: interface for implementing commands
//! - **CommandTable**: maps command names to implementations
//! - **CommandEngine**: dispatches commands and records the history
//! - **ExpressionBridge**: evaluates expression text against bound commands
//! - **CommandLogger**: appends recorded commands to a file for replay

mod args;
mod bridge;
mod command;
pub mod commands;
mod console;
mod error;
mod executor;
mod history;
mod logger;
mod script;

// Re-export main types
pub use args::{ArgDef, ArgType, CommandArgs, Value};
pub use bridge::ExpressionBridge;
pub use command::{Command, CommandContext, CommandInfo, CommandProperties, CommandTable, MAX_ARGS};
pub use console::{BufferConsole, ConsoleLine, ConsoleSink};
pub use error::{CmdError, CmdResult, ParseError};
pub use executor::{format_call, CommandEngine};
pub use history::{CommandHistory, HistoryEntry};
pub use logger::{CommandLogger, LogFormat};
pub use script::prepare_source;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::args::{ArgDef, ArgType, CommandArgs, Value};
    pub use crate::command::{Command, CommandContext, CommandProperties, CommandTable};
    pub use crate::error::{CmdError, CmdResult};
    pub use crate::executor::CommandEngine;
    pub use crate::history::HistoryEntry;
}
