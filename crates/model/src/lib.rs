//! # Model Crate
//!
//! Candidate entity shared by every other crate in the workspace.
//!
//! ## Main Components
//!
//! - **types**: `Candidate`, the loose `CandidateRecord`, `UserId`
//! - **parser**: turn remote JSON payloads into validated candidates
//! - **error**: error types for parsing and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::parse_candidate_list;
//!
//! let payload = source.list_candidates().await?;
//! let candidates = parse_candidate_list(&payload)?;
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ModelError, Result};
pub use parser::{parse_candidate, parse_candidate_list};
pub use types::{Candidate, CandidateRecord, UserId};
