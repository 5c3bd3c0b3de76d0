//! Monotonic clock adapter.
//!
//! The core never reads a clock; the control loop samples this adapter
//! and passes `now` into every call.  Time is measured from adapter
//! construction.

use core::time::Duration;
use std::time::Instant;

/// Monotonic time since the adapter was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since construction.
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds since construction.
    pub fn uptime_secs(&self) -> u64 {
        self.now().as_secs()
    }
}
