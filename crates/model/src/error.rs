//! Error types for the model crate.
//!
//! Raised while turning loosely-shaped remote records into `Candidate`s.

use thiserror::Error;

/// Errors that can occur while parsing or validating candidate records
#[derive(Error, Debug)]
pub enum ModelError {
    /// The top-level payload was expected to be a list of records
    #[error("Expected a list of candidate records but found {found}")]
    NotAList { found: String },

    /// A record could not be deserialized at all
    #[error("Malformed candidate record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field required for validity was absent or empty
    #[error("Candidate record is missing required field {field}")]
    MissingField { field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
