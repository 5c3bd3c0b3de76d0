//! Single-slot one-shot reminder timer.
//!
//! Each reminder unit owns exactly one [`ReminderTimer`].  Arming always
//! replaces whatever was pending, so a unit can never have two
//! outstanding wake-ups.  The timer never reads a clock: callers pass a
//! monotonic `now` and poll for expiry from their control loop.
//!
//! ```text
//!            start(now, d)              poll(now >= deadline)
//!   Idle ─────────────────▶ Pending ────────────────────────▶ Idle (fired)
//!    ▲                        │  ▲
//!    │        cancel()        │  │ start(now, d)  (replaces slot)
//!    └────────────────────────┘  └──┘
//! ```

use core::time::Duration;

/// A one-shot deadline held in a single slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderTimer {
    /// Pending deadline, if armed.
    deadline: Option<Duration>,
}

impl ReminderTimer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, discarding any pending
    /// deadline first.
    pub fn start(&mut self, now: Duration, delay: Duration) {
        self.cancel();
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarm the timer.  No-op when idle.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns the deadline that fired when `now` has reached it, and
    /// clears the slot.  Returns `None` while idle or not yet due.
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
