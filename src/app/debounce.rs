//! Debounce timer for the search controller.
//!
//! Every raw input event schedules a fresh evaluation token and remembers
//! the raw text; the host arms a timer for the new token, implicitly
//! replacing any earlier one. When a timer callback comes back, only the
//! still-current token fires — any evaluation scheduled before it was
//! cancelled outright and never runs. This is the same last-writer-wins
//! token pattern the renderer uses for its generations.

/// Default quiet interval before a pending search evaluates, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Token-issuing debounce timer.
///
/// Holds at most one pending evaluation: the most recently scheduled raw
/// text under a monotonically increasing token.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay_ms: u64,
    next_token: u64,
    current: Option<u64>,
    pending: Option<String>,
}

impl DebounceTimer {
    /// Creates a timer with the given quiet interval.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            next_token: 0,
            current: None,
            pending: None,
        }
    }

    /// Returns the quiet interval in milliseconds.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Schedules an evaluation of `raw` and returns its token.
    ///
    /// Any previously pending evaluation is superseded; its token will no
    /// longer fire.
    pub fn schedule(&mut self, raw: String) -> u64 {
        self.next_token += 1;
        self.current = Some(self.next_token);
        self.pending = Some(raw);
        self.next_token
    }

    /// Fires the evaluation for `token` if it is still current.
    ///
    /// Returns the pending raw text exactly once for the newest token, and
    /// `None` for stale tokens or repeated fires.
    pub fn fire(&mut self, token: u64) -> Option<String> {
        if self.current == Some(token) {
            self.current = None;
            self.pending.take()
        } else {
            tracing::trace!(
                stale = token,
                current = ?self.current,
                "discarding superseded debounce tick"
            );
            None
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_scheduled_token_fires() {
        let mut timer = DebounceTimer::new(300);

        let first = timer.schedule("a".to_string());
        let second = timer.schedule("al".to_string());
        let third = timer.schedule("alpha".to_string());

        assert_eq!(timer.fire(first), None);
        assert_eq!(timer.fire(second), None);
        assert_eq!(timer.fire(third), Some("alpha".to_string()));
    }

    #[test]
    fn a_token_fires_at_most_once() {
        let mut timer = DebounceTimer::default();
        let token = timer.schedule("beta".to_string());

        assert_eq!(timer.fire(token), Some("beta".to_string()));
        assert_eq!(timer.fire(token), None);
    }

    #[test]
    fn tokens_are_monotonically_increasing() {
        let mut timer = DebounceTimer::new(10);
        let a = timer.schedule(String::new());
        let b = timer.schedule(String::new());
        assert!(b > a);
    }
}
