//! Per-unit context threaded through every reminder state handler.
//!
//! Holds the raw contact input, the one-shot timer-expiry event flag,
//! the ambient fast-remind setting, resolved durations, the reminder
//! output and the unit's single timer slot.

use core::time::Duration;

use super::ReminderState;
use crate::config::ReminderTimings;
use crate::timer::ReminderTimer;

/// Length of the reminder "blink" between two cyclic reminders.
pub const REMINDER_BLINK: Duration = Duration::from_secs(1);

/// The shared context passed to every reminder state handler.
#[derive(Debug, Clone)]
pub struct ReminderContext {
    // -- Event --
    /// Timestamp of the event being processed.
    pub now: Duration,
    /// Set for exactly one step when the unit's timer fired.
    pub timer_expired: bool,
    /// State that was left by the transition currently running.
    pub previous: Option<ReminderState>,

    // -- Inputs --
    /// Raw contact state (true = open).
    pub is_open: bool,
    /// Fast cyclic cadence; read only when a cyclic wait is armed.
    pub fast_remind: bool,
    pub timings: ReminderTimings,

    // -- Outputs --
    /// True while the occupant should be reminded.
    pub reminder_active: bool,
    /// The unit's only timer slot.
    pub timer: ReminderTimer,
}

impl ReminderContext {
    pub fn new(timings: ReminderTimings) -> Self {
        Self {
            now: Duration::ZERO,
            timer_expired: false,
            previous: None,
            is_open: false,
            fast_remind: false,
            timings,
            reminder_active: false,
            timer: ReminderTimer::new(),
        }
    }

    /// Delay until the next reminder once the reminder is asserted.
    pub fn cyclic_wait(&self) -> Duration {
        self.timings
            .cyclic_remind(self.fast_remind)
            .saturating_sub(REMINDER_BLINK)
    }
}
