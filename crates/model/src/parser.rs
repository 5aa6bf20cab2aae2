//! Parsing of remote payloads into validated candidates.
//!
//! Remote sources may return partial or malformed records. A non-list
//! top-level payload is an error; individual bad records are dropped.

use crate::error::{ModelError, Result};
use crate::types::{Candidate, CandidateRecord};
use serde::Deserialize;
use serde_json::Value;

/// Parse a list payload, keeping only records that deserialize and are valid.
///
/// Order of the surviving records is preserved.
pub fn parse_candidate_list(payload: &Value) -> Result<Vec<Candidate>> {
    let records = payload.as_array().ok_or_else(|| ModelError::NotAList {
        found: json_kind(payload).to_string(),
    })?;

    let total = records.len();
    let candidates: Vec<Candidate> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| match parse_candidate(raw) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                tracing::debug!("Dropping record {}: {}", idx, e);
                None
            }
        })
        .collect();

    tracing::debug!(
        "Parsed candidate list: {} of {} records valid",
        candidates.len(),
        total
    );
    Ok(candidates)
}

/// Parse a single record (list entry or detail response) into a `Candidate`.
pub fn parse_candidate(raw: &Value) -> Result<Candidate> {
    let record = CandidateRecord::deserialize(raw)?;
    Candidate::try_from(record)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
