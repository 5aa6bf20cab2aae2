//! Error types for the review pipeline.
//!
//! Only session-fatal and caller-misuse errors appear here. Detail-fetch
//! failures are recovered inside the pipeline and never reach the caller.

use model::ModelError;
use sources::SourceError;
use storage::StoreError;
use thiserror::Error;

/// The initial candidate list could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    /// The remote source raised
    #[error("Candidate source failed: {0}")]
    Source(#[from] SourceError),

    /// The remote source answered with something other than a list
    #[error("Candidate source returned invalid data: {0}")]
    Malformed(#[from] ModelError),
}

#[derive(Error, Debug)]
pub enum ReviewError {
    /// Fatal to the browsing session until the pipeline is reinitialized
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `save` was called with a candidate that is not the one under review
    #[error("Candidate {login} is not the current candidate")]
    NotCurrent { login: String },

    /// The queue has no current candidate
    #[error("No candidates left to review")]
    Exhausted,

    /// The saved-candidate snapshot could not be written
    #[error("Failed to persist saved candidates: {0}")]
    Persistence(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
