//! The remote data source seam.
//!
//! The review pipeline only ever talks to candidates through this trait, so
//! an HTTP client, a fixture file and a test double are interchangeable.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A remote provider of candidate records.
///
/// ## Design Note
/// Both operations return raw JSON. The list payload may not even be a list,
/// and individual records may be partial; validation is the caller's job.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch the first page of candidate summary records.
    async fn list_candidates(&self) -> Result<Value>;

    /// Fetch the detailed record for one candidate handle.
    async fn fetch_candidate_detail(&self, login: &str) -> Result<Value>;
}
