//! Column-header sort toggling for a saved-list view.
//!
//! The engine itself is stateless; a view keeps one `SortState` and feeds
//! its key and direction into [`query`](crate::query) on every render.

use crate::sort::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self {
            key: None,
            ascending: true,
        }
    }

    /// Selecting the active key flips direction; any other key becomes the
    /// active key, ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }

    /// Arrow marker for a column header, if `key` is the active one.
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        match (self.key == Some(key), self.ascending) {
            (false, _) => None,
            (true, true) => Some("▲"),
            (true, false) => Some("▼"),
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}
