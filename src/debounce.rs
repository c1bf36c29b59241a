//! Coalescing of rapid input, with an injected clock.
//!
//! The engine is synchronous, so deferring a search while the user is still
//! typing is the caller's job. [`Debouncer`] models that policy without
//! threads or timers: the caller stamps each submission with `Instant::now()`
//! and polls on its own cadence. A newer submission supersedes the pending
//! one and restarts the quiet period.

use std::time::{Duration, Instant};

/// Quiet period applied to search input.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a value at `now`, replacing any pending one.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now));
    }

    /// Yield the pending value once the quiet period has elapsed.
    ///
    /// Returns at most once per submission; later polls return `None` until
    /// the next `submit`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, submitted)) if now.duration_since(*submitted) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Yield the pending value immediately, e.g. on explicit submit.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}
