use thiserror::Error;

use crate::llm::LlmError;

/// Startup configuration errors. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credential '{key}': set the environment variable or add it to {location}")]
    MissingCredential { key: String, location: String },

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// A failed call to the generation service.
///
/// Every provider failure collapses into this one error; the message keeps
/// the underlying failure text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DispatchError {
    pub message: String,
}

impl From<LlmError> for DispatchError {
    fn from(e: LlmError) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

/// Errors from the chat log store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from a guide view request.
#[derive(Debug, Error)]
pub enum GuideError {
    /// Blank input; nothing was sent.
    #[error("Please enter some text first.")]
    EmptyInput,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
