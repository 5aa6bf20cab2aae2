//! The durable collection of accepted candidates.
//!
//! The in-memory sequence is the source of truth while the process runs;
//! every mutation writes the full sequence back to the medium as one JSON
//! snapshot under [`SAVED_CANDIDATES_KEY`].

use crate::error::{Result, StoreError};
use crate::medium::KeyValueStore;
use model::Candidate;
use std::sync::{Arc, Mutex, MutexGuard};

/// Key the saved-candidate snapshot is stored under
pub const SAVED_CANDIDATES_KEY: &str = "savedCandidates";

/// Outcome of rehydrating from the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotStatus {
    /// Nothing was persisted yet
    Missing,
    /// Snapshot parsed; `count` candidates restored
    Restored { count: usize },
    /// Snapshot was corrupt and has been deleted; the saved list is now empty.
    /// Callers should tell the user their saved data was cleared.
    Cleared { reason: String },
}

/// Ordered, persisted list of saved candidates.
///
/// No uniqueness is enforced on `user_login`: saving the same handle twice
/// stores it twice.
pub struct SavedCandidateStore {
    medium: Arc<dyn KeyValueStore>,
    candidates: Mutex<Vec<Candidate>>,
}

impl SavedCandidateStore {
    /// Create an empty store over `medium`. Call [`load`](Self::load) to
    /// rehydrate from a previous session.
    pub fn new(medium: Arc<dyn KeyValueStore>) -> Self {
        Self {
            medium,
            candidates: Mutex::new(Vec::new()),
        }
    }

    /// Create a store and immediately rehydrate it.
    pub fn open(medium: Arc<dyn KeyValueStore>) -> Result<(Self, SnapshotStatus)> {
        let store = Self::new(medium);
        let status = store.load()?;
        Ok((store, status))
    }

    /// Replace the in-memory list with the persisted snapshot.
    ///
    /// A snapshot that fails to deserialize, or a medium too damaged to read,
    /// is removed from the medium and the list starts empty; only medium I/O
    /// failures are returned as errors.
    pub fn load(&self) -> Result<SnapshotStatus> {
        let raw = match self.medium.get(SAVED_CANDIDATES_KEY) {
            Ok(raw) => raw,
            Err(StoreError::Corrupt { reason }) => return self.clear_corrupt(reason),
            Err(e) => return Err(e),
        };
        let mut candidates = self.lock()?;

        let Some(raw) = raw else {
            candidates.clear();
            tracing::debug!("No saved-candidate snapshot found");
            return Ok(SnapshotStatus::Missing);
        };

        match serde_json::from_str::<Vec<Candidate>>(&raw) {
            Ok(parsed) => {
                let count = parsed.len();
                *candidates = parsed;
                tracing::info!("Restored {} saved candidates", count);
                Ok(SnapshotStatus::Restored { count })
            }
            Err(e) => {
                drop(candidates);
                self.clear_corrupt(e.to_string())
            }
        }
    }

    /// Add `candidate` to the end of the list and persist.
    ///
    /// The in-memory list only changes once the medium accepted the write.
    pub fn append(&self, candidate: Candidate) -> Result<()> {
        let mut candidates = self.lock()?;
        tracing::debug!("Saving candidate {}", candidate.user_login);
        let mut updated = candidates.clone();
        updated.push(candidate);
        self.persist(&updated)?;
        *candidates = updated;
        Ok(())
    }

    /// Remove every entry whose handle equals `user_login` and persist.
    ///
    /// Returns how many entries were removed.
    pub fn remove(&self, user_login: &str) -> Result<usize> {
        let mut candidates = self.lock()?;
        let updated: Vec<Candidate> = candidates
            .iter()
            .filter(|candidate| candidate.user_login != user_login)
            .cloned()
            .collect();
        let removed = candidates.len() - updated.len();
        self.persist(&updated)?;
        tracing::debug!("Removed {} saved entries for {}", removed, user_login);
        *candidates = updated;
        Ok(removed)
    }

    /// Snapshot of the current list, in insertion order.
    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn clear_corrupt(&self, reason: String) -> Result<SnapshotStatus> {
        tracing::warn!("Saved-candidate snapshot is corrupt, clearing it: {}", reason);
        self.lock()?.clear();
        self.medium.remove(SAVED_CANDIDATES_KEY)?;
        Ok(SnapshotStatus::Cleared { reason })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Candidate>>> {
        self.candidates.lock().map_err(|_| StoreError::Poisoned)
    }

    fn persist(&self, candidates: &[Candidate]) -> Result<()> {
        let json = serde_json::to_string(candidates)?;
        self.medium.set(SAVED_CANDIDATES_KEY, &json)
    }
}
