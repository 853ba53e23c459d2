//! Search debounce
//!
//! Deadline state machine over a caller-supplied monotonic clock: every
//! keystroke re-arms a single pending search, and the pending text fires
//! once the deadline has passed. Passing `now` explicitly keeps the core
//! runtime-free; the async driver supplies the real timer.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a search commits
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct PendingSearch {
    text: String,
    due: Instant,
}

/// Single-slot debounce window for the picker search box
#[derive(Debug, Clone, Default)]
pub struct SearchDebouncer {
    pending: Option<PendingSearch>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke; replaces any pending text and restarts the window
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(PendingSearch {
            text: text.into(),
            due: now + SEARCH_DEBOUNCE,
        });
    }

    /// Deadline of the pending search, if one is armed
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending text if its deadline has passed
    pub fn fire_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.text)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_the_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new();
        debouncer.input("shirt", t0);

        assert_eq!(debouncer.fire_due(t0 + Duration::from_millis(200)), None);
        assert_eq!(
            debouncer.fire_due(t0 + SEARCH_DEBOUNCE),
            Some("shirt".to_string())
        );
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_rapid_retyping_keeps_only_the_final_text() {
        let t0 = Instant::now();
        let mut debouncer = SearchDebouncer::new();
        debouncer.input("s", t0);
        debouncer.input("sh", t0 + Duration::from_millis(100));
        debouncer.input("shirt", t0 + Duration::from_millis(200));

        // The first keystroke's deadline has passed, but the window restarted
        assert_eq!(debouncer.fire_due(t0 + Duration::from_millis(350)), None);

        let fired = debouncer.fire_due(t0 + Duration::from_millis(500));
        assert_eq!(fired, Some("shirt".to_string()));
        assert_eq!(debouncer.fire_due(t0 + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_nothing_armed_nothing_fires() {
        let mut debouncer = SearchDebouncer::new();
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.fire_due(Instant::now()), None);
    }
}
