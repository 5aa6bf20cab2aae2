//! The review queue: a bounded, cursor-addressed list of candidates.
//!
//! Each slot carries its own enrichment status so that at most one detail
//! fetch is ever issued per position, however often the caller asks.

use model::Candidate;

/// Progress of the detail fetch for one queue slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStatus {
    NotStarted,
    InFlight,
    Done,
}

/// Where the pipeline is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewPhase {
    /// Never initialized
    Empty,
    /// Initial list fetch in progress
    Loading,
    /// A candidate is under review at `cursor`
    Ready { cursor: usize },
    /// Every loaded candidate has been decided; only a new load recovers
    Exhausted,
    /// The last load failed; only a new load recovers
    Errored,
}

#[derive(Debug, Clone)]
struct Slot {
    candidate: Candidate,
    enrichment: EnrichmentStatus,
}

/// Ordered candidates plus a cursor.
///
/// Invariant: `cursor < len()` whenever the queue is non-empty. The queue is
/// never left pointing past its end: advancing off the last slot is reported
/// to the caller, which replaces the queue with an empty one.
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    slots: Vec<Slot>,
    cursor: usize,
}

impl ReviewQueue {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            slots: candidates
                .into_iter()
                .map(|candidate| Slot {
                    candidate,
                    enrichment: EnrichmentStatus::NotStarted,
                })
                .collect(),
            cursor: 0,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Candidate> {
        self.slots.get(self.cursor).map(|slot| &slot.candidate)
    }

    pub fn enrichment_at(&self, position: usize) -> Option<EnrichmentStatus> {
        self.slots.get(position).map(|slot| slot.enrichment)
    }

    /// Claim the current slot for enrichment.
    ///
    /// Returns the position and handle to fetch when the slot has not been
    /// enriched yet, marking it `InFlight`; `None` otherwise.
    pub fn begin_enrichment(&mut self) -> Option<(usize, String)> {
        let position = self.cursor;
        let slot = self.slots.get_mut(position)?;
        if slot.enrichment != EnrichmentStatus::NotStarted {
            return None;
        }
        slot.enrichment = EnrichmentStatus::InFlight;
        Some((position, slot.candidate.user_login.clone()))
    }

    /// Record the outcome of the fetch started for `position`.
    ///
    /// `Some` replaces the slot's candidate; `None` keeps the summary record.
    /// The slot is marked `Done` either way.
    pub fn finish_enrichment(&mut self, position: usize, enriched: Option<Candidate>) {
        let Some(slot) = self.slots.get_mut(position) else {
            return;
        };
        if let Some(candidate) = enriched {
            slot.candidate = candidate;
        }
        slot.enrichment = EnrichmentStatus::Done;
    }

    /// Move to the next slot. Returns `false` when there is none, in which
    /// case the cursor is left unchanged and the caller must discard the queue.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
}
