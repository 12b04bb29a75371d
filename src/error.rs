//! Error types for stackplan
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stackplan operations
pub type StackplanResult<T> = Result<T, StackplanError>;

/// Main error type for stackplan operations
#[derive(Error, Debug)]
pub enum StackplanError {
    /// Required context group or key is absent
    #[error("missing required context value '{path}'")]
    MissingContext { path: String },

    /// Required tag key is absent from the merged tag set
    #[error("missing required tag '{key}' in context tags")]
    MissingTag { key: String },

    /// Context document could not be parsed
    #[error("invalid context in {file}: {message}")]
    InvalidContext { file: PathBuf, message: String },

    /// Tool configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Named profile does not exist in the context document
    #[error("unknown profile '{profile}' - context defines: {available}")]
    UnknownProfile { profile: String, available: String },

    /// Named region does not exist under the selected profile
    #[error("unknown region '{region}' under profile '{profile}'")]
    UnknownRegion { profile: String, region: String },

    /// Context defines deployment profiles but none was selected
    #[error("context defines deployment profiles - select one with --profile and --region")]
    ProfileRequired,

    /// A profile was selected against a flat (non-profile) context
    #[error("context has no deployment profiles but '--profile {profile}' was given")]
    ProfileNotApplicable { profile: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
