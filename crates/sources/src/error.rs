//! Error types for remote candidate sources.

use thiserror::Error;

/// Errors a remote source can raise for either of its two operations
#[derive(Error, Debug)]
pub enum SourceError {
    /// Backing file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing document was not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No detail record exists for the requested login
    #[error("No detail record for user {login}")]
    NotFound { login: String },

    /// The source could not serve the request
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
