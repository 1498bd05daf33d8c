//! Error types for the fallible edges of the crate.
//!
//! The resolver and the order calculator are total and never fail; errors only
//! arise when shaping untyped input, planning against a snapshot, or loading
//! configuration.

use thiserror::Error;

/// A drag/drop candidate failed the shape guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("drag/drop state must be a JSON object")]
    NotAnObject,
    #[error("`{field}` must be a non-empty string")]
    InvalidId { field: &'static str },
    #[error("`{field}` must be null, absent, or a string")]
    InvalidGroupId { field: &'static str },
}

/// Unknown drop action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown drop action `{0}`")]
pub struct ParseDropActionError(pub(crate) String);

/// A drop could not be planned against the given snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("idea `{0}` is not in the snapshot")]
    IdeaNotFound(String),
    #[error("ideas `{active}` and `{target}` are in different categories")]
    CategoryMismatch { active: String, target: String },
    #[error("invalid drag/drop state: {0}")]
    InvalidState(#[from] GuardError),
}

/// Errors that can occur when loading a grouping configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
