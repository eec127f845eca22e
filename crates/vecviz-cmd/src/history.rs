//! Command history
//!
//! Every successful dispatch appends one entry. The history is exported
//! and replayed as a JSON array of `{"cmdName": .., "cmdArgs": {..}}`
//! objects.

use serde::{Deserialize, Serialize};

use crate::args::CommandArgs;
use crate::error::{CmdResult, ParseError};

/// One executed command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "cmdName")]
    pub cmd_name: String,
    #[serde(rename = "cmdArgs", default)]
    pub cmd_args: CommandArgs,
}

impl HistoryEntry {
    pub fn new(cmd_name: impl Into<String>, cmd_args: CommandArgs) -> Self {
        Self {
            cmd_name: cmd_name.into(),
            cmd_args,
        }
    }
}

/// Ordered log of executed commands
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export as a JSON array
    pub fn to_json(&self) -> CmdResult<String> {
        serde_json::to_string(&self.entries).map_err(|e| ParseError::from(e).into())
    }

    /// Parse a JSON command list
    pub fn parse_json(text: &str) -> Result<Vec<HistoryEntry>, ParseError> {
        Ok(serde_json::from_str(text)?)
    }
}
