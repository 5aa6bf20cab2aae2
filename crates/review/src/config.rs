//! Review pipeline settings.

/// Default cap on how many valid candidates one load keeps
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Valid candidates beyond this many are dropped at load time
    pub max_results: usize,
}

impl ReviewConfig {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}
