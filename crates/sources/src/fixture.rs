//! File-backed candidate source.
//!
//! Serves candidates from a JSON document on disk:
//!
//! ```json
//! {
//!   "candidates": [ { "userId": 1, "userLogin": "ada", "profileUrl": "..." } ],
//!   "details": { "ada": { "userId": 1, "userLogin": "ada", "fullName": "Ada Lovelace", ... } }
//! }
//! ```
//!
//! `candidates` is returned verbatim, whatever its shape, so a broken fixture
//! exercises the same load-failure path a broken remote would.

use crate::error::{Result, SourceError};
use crate::traits::CandidateSource;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Candidate source backed by a fixture document.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    candidates: Value,
    details: Map<String, Value>,
}

impl FixtureSource {
    /// Read and parse a fixture document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        let source = Self::from_document(document);
        tracing::info!(
            "Loaded fixture source from {} ({} detail records)",
            path.display(),
            source.details.len()
        );
        Ok(source)
    }

    /// Build a source from an already-parsed document.
    ///
    /// A missing `candidates` key yields `null`, which the pipeline rejects
    /// as a malformed list.
    pub fn from_document(mut document: Value) -> Self {
        let candidates = document
            .get_mut("candidates")
            .map(Value::take)
            .unwrap_or(Value::Null);
        let details = match document.get_mut("details").map(Value::take) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self { candidates, details }
    }
}

#[async_trait]
impl CandidateSource for FixtureSource {
    fn name(&self) -> &str {
        "FixtureSource"
    }

    async fn list_candidates(&self) -> Result<Value> {
        Ok(self.candidates.clone())
    }

    async fn fetch_candidate_detail(&self, login: &str) -> Result<Value> {
        self.details
            .get(login)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                login: login.to_string(),
            })
    }
}
