//! # Storage Crate
//!
//! Durable client-side state for candidate review.
//!
//! - **medium**: `KeyValueStore` trait with in-memory and JSON-file media
//! - **saved**: `SavedCandidateStore`, the persisted list of accepted candidates
//! - **error**: `StoreError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use storage::{FileStore, SavedCandidateStore, SnapshotStatus};
//! use std::sync::Arc;
//!
//! let (saved, status) = SavedCandidateStore::open(Arc::new(FileStore::new("saved.json")))?;
//! if let SnapshotStatus::Cleared { reason } = status {
//!     eprintln!("Saved candidates were corrupt and have been cleared: {reason}");
//! }
//! saved.append(candidate)?;
//! ```

pub mod error;
pub mod medium;
pub mod saved;

pub use error::{Result, StoreError};
pub use medium::{FileStore, KeyValueStore, MemoryStore};
pub use saved::{SAVED_CANDIDATES_KEY, SavedCandidateStore, SnapshotStatus};
