//! Error types for the scene crate

use thiserror::Error;

use crate::entity::EntityKind;

/// Scene-related errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// An entity of this kind already uses the name
    #[error("A {kind} named \"{name}\" already exists.  Please choose a new name.")]
    DuplicateName { kind: EntityKind, name: String },

    /// No live entity answers to this name or shortcut
    #[error("A {kind} named \"{name}\" could not be found.")]
    NotFound { kind: EntityKind, name: String },

    /// Render mode name is not recognized
    #[error("Unknown render mode: {0}")]
    UnknownRenderMode(String),

    /// Setting name is not recognized
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// Setting value does not fit the setting's type
    #[error("Invalid value for setting '{name}': {reason}")]
    InvalidSetting { name: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be (de)serialized
    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Errors a command handler reports back to the user instead of failing
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, SceneError::DuplicateName { .. } | SceneError::NotFound { .. })
    }

    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        SceneError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn duplicate(kind: EntityKind, name: impl Into<String>) -> Self {
        SceneError::DuplicateName {
            kind,
            name: name.into(),
        }
    }
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
