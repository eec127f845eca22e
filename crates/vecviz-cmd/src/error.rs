//! Error types for the command system
//!
//! Dispatch-level failures live in [`CmdError`]; text that could not be
//! parsed (JSON command lists, expression source) is described by
//! [`ParseError`].

use thiserror::Error;
use vecviz_scene::SceneError;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CmdError {
    /// Command list or expression source could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Argument present but of the wrong kind
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Required argument absent
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Command definition rejected at registration
    #[error("invalid definition for command '{command}': {reason}")]
    Schema { command: String, reason: String },

    /// Scene error (from vecviz-scene)
    #[error("{0}")]
    Scene(#[from] SceneError),

    /// Expression evaluation failed (unknown symbol, wrong arity, type error)
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing command text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Malformed JSON command list
    #[error("{message} at line {line}, column {column}")]
    Json {
        message: String,
        line: usize,
        column: usize,
    },

    /// Malformed expression source
    #[error("{message} at line {line}")]
    Script { message: String, line: usize },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl From<rhai::ParseError> for ParseError {
    fn from(err: rhai::ParseError) -> Self {
        ParseError::Script {
            message: err.0.to_string(),
            line: err.1.line().unwrap_or(0),
        }
    }
}

impl CmdError {
    /// Create an invalid argument error
    pub fn invalid_arg(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a schema error
    pub fn schema(command: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::Schema {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create an evaluation error
    pub fn evaluation(msg: impl Into<String>) -> Self {
        CmdError::Evaluation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecviz_scene::EntityKind;

    #[test]
    fn test_error_display() {
        let err = CmdError::MissingArgument("vector".to_string());
        assert_eq!(format!("{}", err), "missing required argument: vector");

        let err = CmdError::invalid_arg("scalar", "expected a number");
        assert_eq!(
            format!("{}", err),
            "invalid argument 'scalar': expected a number"
        );
    }

    #[test]
    fn test_scene_error_passes_through() {
        let err: CmdError = SceneError::not_found(EntityKind::Vector, "up").into();
        assert_eq!(
            format!("{}", err),
            "A vector named \"up\" could not be found."
        );
    }

    #[test]
    fn test_json_parse_error_position() {
        let err = serde_json::from_str::<serde_json::Value>("[\n  {,\n]").unwrap_err();
        match ParseError::from(err) {
            ParseError::Json { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }
}
