//! # Sources Crate
//!
//! Remote data sources for candidate review.
//!
//! ## Components
//!
//! ### CandidateSource (trait)
//! The two remote operations the review pipeline depends on:
//! - `list_candidates()`: first page of summary records
//! - `fetch_candidate_detail(login)`: the detailed record for one handle
//!
//! ### FixtureSource
//! Serves a JSON fixture document from disk; the CLI's offline source.
//!
//! ### StaticSource
//! Scripted in-memory source with call counters and a detail gate, for tests.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CandidateSource, FixtureSource};
//! use std::sync::Arc;
//!
//! let source: Arc<dyn CandidateSource> = Arc::new(FixtureSource::from_path(path)?);
//! let payload = source.list_candidates().await?;
//! ```

pub mod error;
pub mod fixture;
pub mod memory;
pub mod traits;

pub use error::{Result, SourceError};
pub use fixture::FixtureSource;
pub use memory::StaticSource;
pub use traits::CandidateSource;
