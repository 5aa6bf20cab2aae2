//! In-memory candidate source.
//!
//! Used by tests and demos to script exactly what the remote returns, count
//! how often details are requested, and hold detail fetches in flight until
//! a test releases them.

use crate::error::{Result, SourceError};
use crate::traits::CandidateSource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Scripted, in-memory candidate source.
///
/// ## Usage
/// ```ignore
/// let gate = Arc::new(Semaphore::new(0));
/// let source = StaticSource::new(json!([...]))
///     .with_detail("ada", json!({ ... }))
///     .with_gate(gate.clone());
/// ```
pub struct StaticSource {
    list_payload: Mutex<std::result::Result<Value, String>>,
    details: HashMap<String, Value>,
    gate: Option<Arc<Semaphore>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl StaticSource {
    /// Create a source whose list call returns `payload`.
    pub fn new(payload: Value) -> Self {
        Self {
            list_payload: Mutex::new(Ok(payload)),
            details: HashMap::new(),
            gate: None,
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    /// Create a source whose list call always fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        let source = Self::new(Value::Null);
        source.fail_list(reason);
        source
    }

    /// Register the detail record served for `login` (builder pattern).
    pub fn with_detail(mut self, login: impl Into<String>, record: Value) -> Self {
        self.details.insert(login.into(), record);
        self
    }

    /// Every detail fetch must acquire one permit from `gate` before it
    /// resolves.
    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Replace what subsequent list calls return.
    pub fn set_list_payload(&self, payload: Value) {
        if let Ok(mut slot) = self.list_payload.lock() {
            *slot = Ok(payload);
        }
    }

    /// Make subsequent list calls fail.
    pub fn fail_list(&self, reason: impl Into<String>) {
        if let Ok(mut slot) = self.list_payload.lock() {
            *slot = Err(reason.into());
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateSource for StaticSource {
    fn name(&self) -> &str {
        "StaticSource"
    }

    async fn list_candidates(&self) -> Result<Value> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let slot = self
            .list_payload
            .lock()
            .map_err(|_| SourceError::Unavailable("list payload lock poisoned".to_string()))?;
        slot.clone().map_err(SourceError::Unavailable)
    }

    async fn fetch_candidate_detail(&self, login: &str) -> Result<Value> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|_| SourceError::Unavailable("detail gate closed".to_string()))?
                .forget();
        }

        self.details
            .get(login)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                login: login.to_string(),
            })
    }
}
