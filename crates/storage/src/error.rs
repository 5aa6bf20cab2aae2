//! Error types for the storage crate.

use thiserror::Error;

/// Errors raised by a persistence medium or the saved-candidate store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The medium's backing data exists but cannot be parsed
    #[error("Corrupt store: {reason}")]
    Corrupt { reason: String },

    /// A lock guarding in-memory state was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
