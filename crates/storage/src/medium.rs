//! Persistence media: opaque string key-value stores.
//!
//! The saved-candidate store writes one serialized snapshot under a single
//! key. Two media are provided: a process-local map and a JSON file that
//! survives restarts.

use crate::error::{Result, StoreError};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A durable string key-value medium.
pub trait KeyValueStore: Send + Sync {
    /// Read `key`. A medium whose own storage is unreadable returns
    /// [`StoreError::Corrupt`].
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error, and removing
    /// from a corrupt medium resets it.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local medium, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed medium.
///
/// All keys live in one JSON object file. Every `set`/`remove` rewrites the
/// whole file; a missing file reads as an empty store. An unparseable file
/// fails `get` with [`StoreError::Corrupt`] and is replaced by the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            reason: format!("{}: {}", self.path.display(), e),
        })
    }

    /// Entries to start a write from. A corrupt file is discarded; the flag
    /// reports that it must be rewritten.
    fn entries_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StoreError::Corrupt { reason }) => {
                tracing::warn!("Discarding unreadable store file {}", reason);
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let (mut entries, reset) = self.entries_for_write()?;
        if entries.remove(key).is_some() || reset {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
