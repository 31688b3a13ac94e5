//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while incorporating or merging timer trees
///
/// These indicate a caller bug (a malformed execution tree or a corrupted
/// aggregate), never a transient condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Nested timer under '{parent}' has no name (only the synthetic root may be anonymous)")]
    AnonymousTimer { parent: String },
}

/// Errors that can occur while decoding timer data
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid timer format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Null entry in nestedTimers of '{parent}'")]
    NullNestedTimer { parent: String },

    #[error("Nested timer under '{parent}' has no name")]
    AnonymousTimer { parent: String },

    #[error("Duplicate nested timer '{name}' (extended: {extended}) under '{parent}'")]
    DuplicateTimer {
        parent: String,
        name: String,
        extended: bool,
    },
}

/// Errors that can occur during file input and output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to decode file contents: {0}")]
    Decode(#[from] ParseError),
}
