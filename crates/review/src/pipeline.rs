//! # Candidate Review Pipeline
//!
//! Coordinates one browsing session:
//! 1. Load a bounded list of valid candidates from the remote source
//! 2. Expose one current candidate through a cursor
//! 3. Enrich the current candidate with a detail fetch, at most once per slot
//! 4. Save (persist, then advance) or skip (advance)
//! 5. Discard the queue once every candidate has been decided
//!
//! ## Staleness
//! Every load and every exhaustion bumps a generation counter. Results of a
//! suspended fetch are applied only if the generation they started under is
//! still current; anything else is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use model::{Candidate, parse_candidate, parse_candidate_list};
use sources::CandidateSource;
use storage::SavedCandidateStore;

use crate::config::ReviewConfig;
use crate::error::{LoadError, Result, ReviewError};
use crate::queue::{EnrichmentStatus, ReviewPhase, ReviewQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Empty,
    Loading,
    Ready,
    Exhausted,
    Errored,
}

#[derive(Debug)]
struct ReviewState {
    queue: ReviewQueue,
    stage: Stage,
    error: Option<String>,
    generation: u64,
}

impl ReviewState {
    fn new() -> Self {
        Self {
            queue: ReviewQueue::empty(),
            stage: Stage::Empty,
            error: None,
            generation: 0,
        }
    }

    /// Drop the queue and invalidate any fetch started against it.
    fn discard_queue(&mut self) {
        self.queue = ReviewQueue::empty();
        self.generation += 1;
    }
}

/// Browsing state machine over a remote candidate source.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct ReviewPipeline {
    source: Arc<dyn CandidateSource>,
    saved: Arc<SavedCandidateStore>,
    config: ReviewConfig,
    state: Arc<Mutex<ReviewState>>,
}

impl ReviewPipeline {
    /// Create a pipeline in the `Empty` phase. Nothing is fetched until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(
        source: Arc<dyn CandidateSource>,
        saved: Arc<SavedCandidateStore>,
        config: ReviewConfig,
    ) -> Self {
        Self {
            source,
            saved,
            config,
            state: Arc::new(Mutex::new(ReviewState::new())),
        }
    }

    /// Replace the queue with a freshly loaded list.
    ///
    /// Clears any previous error. On failure the queue stays empty, the
    /// pipeline moves to `Errored` and the error is returned; nothing is
    /// retried. If another `initialize` starts while this one is suspended,
    /// this one's result is dropped.
    pub async fn initialize(&self) -> Result<()> {
        let generation = {
            let mut state = self.lock();
            state.discard_queue();
            state.stage = Stage::Loading;
            state.error = None;
            state.generation
        };
        info!("Loading candidates from {}", self.source.name());

        let loaded = self.load_candidates().await;

        let mut state = self.lock();
        if state.generation != generation {
            debug!("Dropping candidate list superseded by a newer load");
            return Ok(());
        }

        match loaded {
            Ok(candidates) => {
                info!("Loaded {} candidates for review", candidates.len());
                state.stage = if candidates.is_empty() {
                    Stage::Exhausted
                } else {
                    Stage::Ready
                };
                state.queue = ReviewQueue::new(candidates);
                Ok(())
            }
            Err(e) => {
                warn!("Error loading candidates: {}", e);
                state.stage = Stage::Errored;
                state.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Restart the machine from any phase, including `Exhausted` and
    /// `Errored`.
    pub async fn reinitialize(&self) -> Result<()> {
        info!("Reinitializing review session");
        self.initialize().await
    }

    /// The candidate under review, if any.
    pub fn current(&self) -> Option<Candidate> {
        self.lock().queue.current().cloned()
    }

    /// Fetch details for the current candidate if that has not happened yet.
    ///
    /// Repeated or concurrent calls for the same position issue one fetch.
    /// A failed fetch keeps the summary record and still marks the position
    /// done; the failure is only logged.
    pub async fn ensure_enriched(&self) {
        let (generation, position, login) = {
            let mut state = self.lock();
            let generation = state.generation;
            match state.queue.begin_enrichment() {
                Some((position, login)) => (generation, position, login),
                None => return,
            }
        };
        debug!("Fetching details for {} (position {})", login, position);

        let enriched = match self.source.fetch_candidate_detail(&login).await {
            Ok(raw) => match parse_candidate(&raw) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!("Discarding unusable detail record for {}: {}", login, e);
                    None
                }
            },
            Err(e) => {
                warn!("Error fetching details for {}: {}", login, e);
                None
            }
        };

        let mut state = self.lock();
        if state.generation != generation {
            debug!("Ignoring stale detail result for {}", login);
            return;
        }
        state.queue.finish_enrichment(position, enriched);
    }

    /// Accept the current candidate: persist it, then advance.
    ///
    /// `candidate` must identify the current candidate (same id and handle).
    /// The record stored is the queue's own, which may be more enriched than
    /// the caller's copy.
    pub fn save(&self, candidate: &Candidate) -> Result<()> {
        let mut state = self.lock();
        let current = state.queue.current().ok_or(ReviewError::Exhausted)?;
        if current.user_id != candidate.user_id || current.user_login != candidate.user_login {
            return Err(ReviewError::NotCurrent {
                login: candidate.user_login.clone(),
            });
        }

        self.saved.append(current.clone())?;
        info!("Saved candidate {}", candidate.user_login);
        Self::advance(&mut state);
        Ok(())
    }

    /// Reject the current candidate and advance.
    pub fn skip(&self) -> Result<()> {
        let mut state = self.lock();
        let login = state
            .queue
            .current()
            .map(|c| c.user_login.clone())
            .ok_or(ReviewError::Exhausted)?;
        debug!("Skipped candidate {}", login);
        Self::advance(&mut state);
        Ok(())
    }

    pub fn phase(&self) -> ReviewPhase {
        let state = self.lock();
        match state.stage {
            Stage::Empty => ReviewPhase::Empty,
            Stage::Loading => ReviewPhase::Loading,
            Stage::Ready => ReviewPhase::Ready {
                cursor: state.queue.cursor(),
            },
            Stage::Exhausted => ReviewPhase::Exhausted,
            Stage::Errored => ReviewPhase::Errored,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lock().stage == Stage::Loading
    }

    /// Message of the last load failure, cleared by the next load.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn cursor(&self) -> usize {
        self.lock().queue.cursor()
    }

    /// Number of candidates in the queue, including already-decided ones.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// Enrichment status of the current position, if there is one.
    pub fn enrichment_status(&self) -> Option<EnrichmentStatus> {
        let state = self.lock();
        state.queue.enrichment_at(state.queue.cursor())
    }

    pub fn saved(&self) -> &Arc<SavedCandidateStore> {
        &self.saved
    }

    pub fn config(&self) -> ReviewConfig {
        self.config
    }

    async fn load_candidates(&self) -> std::result::Result<Vec<Candidate>, LoadError> {
        let payload = self.source.list_candidates().await?;
        let mut candidates = parse_candidate_list(&payload)?;
        if candidates.len() > self.config.max_results {
            debug!(
                "Keeping first {} of {} valid candidates",
                self.config.max_results,
                candidates.len()
            );
            candidates.truncate(self.config.max_results);
        }
        Ok(candidates)
    }

    fn advance(state: &mut ReviewState) {
        if !state.queue.advance() {
            info!("All candidates reviewed, discarding queue");
            state.discard_queue();
            state.stage = Stage::Exhausted;
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReviewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
