//! Review crate: the candidate browsing pipeline.
//!
//! This crate contains the state machine that loads a bounded list of
//! candidates, enriches the one under review, and records save/skip
//! decisions into the saved-candidate store.
//!
//! ## State machine
//! ```text
//! Empty --initialize--> Loading --ok--> Ready(0) --save/skip--> Ready(1) ... --> Exhausted
//!                               \--err--> Errored
//! Exhausted / Errored --initialize--> Loading
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod queue;

pub use config::{DEFAULT_MAX_RESULTS, ReviewConfig};
pub use error::{LoadError, Result, ReviewError};
pub use pipeline::ReviewPipeline;
pub use queue::{EnrichmentStatus, ReviewPhase, ReviewQueue};
