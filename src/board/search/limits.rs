//! Deadlines and stop flags shared with a driver thread.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Clock for tracking search time limits
#[derive(Debug)]
pub struct SearchClock {
    start_time: Mutex<Instant>,
    deadline: Mutex<Option<Instant>>,
}

impl SearchClock {
    #[must_use]
    pub fn new(start_time: Instant, deadline: Option<Instant>) -> Self {
        SearchClock {
            start_time: Mutex::new(start_time),
            deadline: Mutex::new(deadline),
        }
    }

    /// Start now, with an optional budget
    #[must_use]
    pub fn starting_now(budget: Option<Duration>) -> Self {
        let now = Instant::now();
        SearchClock::new(now, budget.map(|b| now + b))
    }

    pub fn reset(&self, start_time: Instant, deadline: Option<Instant>) {
        *self.start_time.lock() = start_time;
        *self.deadline.lock() = deadline;
    }

    pub fn snapshot(&self) -> (Instant, Option<Instant>) {
        let start_time = *self.start_time.lock();
        let deadline = *self.deadline.lock();
        (start_time, deadline)
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        self.deadline.lock().is_some_and(|d| Instant::now() >= d)
    }
}

impl Default for SearchClock {
    fn default() -> Self {
        SearchClock::new(Instant::now(), None)
    }
}

/// Time limits for a search
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    pub clock: Arc<SearchClock>,
    pub stop: Arc<AtomicBool>,
}

impl SearchLimits {
    #[must_use]
    pub fn new(clock: Arc<SearchClock>, stop: Arc<AtomicBool>) -> Self {
        SearchLimits { clock, stop }
    }

    /// Ask a running search to stop at its next check
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || self.clock.expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_without_deadline_never_expires() {
        let clock = SearchClock::starting_now(None);
        assert!(!clock.expired());
        assert!(clock.snapshot().1.is_none());
    }

    #[test]
    fn test_clock_reset_moves_deadline() {
        let clock = SearchClock::starting_now(Some(Duration::from_secs(60)));
        assert!(!clock.expired());
        let now = Instant::now();
        clock.reset(now, Some(now));
        assert!(clock.expired());
    }

    #[test]
    fn test_stop_flag_is_shared() {
        let limits = SearchLimits::default();
        let driver = limits.clone();
        assert!(!limits.should_stop());
        driver.request_stop();
        assert!(limits.should_stop());
    }
}
