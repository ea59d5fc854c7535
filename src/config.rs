//! Checker configuration.

use std::time::Duration;

/// Default quiet period before an async evaluation runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Settings for the async delivery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Delay between an input change and its evaluation. A change arriving
    /// within this window cancels the pending one.
    pub debounce: Duration,
}

impl CheckerConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}
