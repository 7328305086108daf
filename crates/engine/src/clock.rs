//! Timestamp source used for id assignment.

use std::cell::Cell;

use chrono::Utc;

/// Host-provided current time, in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Deterministic clock for tests. Every reading advances by `step` millis.
#[derive(Debug, Clone)]
pub struct FixedClock {
    next: Cell<i64>,
    step: i64,
}

impl FixedClock {
    /// A clock that always returns `millis`.
    pub fn at(millis: i64) -> Self {
        Self::stepping(millis, 0)
    }

    /// A clock returning `start`, `start + step`, `start + 2 * step`, ...
    pub fn stepping(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now.saturating_add(self.step));
        now
    }
}
