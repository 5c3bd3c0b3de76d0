//! Sensor reminder unit, one per configured window or door.
//!
//! Owns the raw contact input, the reminder engine and its context, and
//! translates engine output changes into [`AppEvent`]s.  Every raw edge
//! is reported to the security controller before the local reminder
//! bookkeeping runs.

use core::time::Duration;

use log::{info, warn};
use serde::Serialize;

use super::context::ReminderContext;
use super::states::build_state_table;
use super::{ReminderFsm, ReminderState};
use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, OpeningReport};
use crate::config::ReminderTimings;

/// Serial identifier of a unit, starting at 1 in configuration order.
pub type UnitId = u32;

/// Capacity of unit name and description labels.
pub const LABEL_LEN: usize = 48;

/// Fixed-capacity display label.
pub type Label = heapless::String<LABEL_LEN>;

/// Build a label, truncating at the last whole character that fits.
pub fn label(text: &str) -> Label {
    let (out, truncated) = fit_label(text);
    if truncated {
        warn!("name '{text}' longer than {LABEL_LEN} bytes, shortened to '{out}'");
    }
    out
}

/// Copy as many whole characters as fit.  The flag is set when some
/// were cut.
fn fit_label(text: &str) -> (Label, bool) {
    let mut out = Label::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            return (out, true);
        }
    }
    (out, false)
}

/// One window or door with its reminder state machine.
pub struct ReminderUnit {
    id: UnitId,
    name: Label,
    description: Label,
    fsm: ReminderFsm,
    ctx: ReminderContext,
}

impl ReminderUnit {
    /// Create a unit in `Closed` with no pending timer.
    pub fn new(id: UnitId, name: &str, description: Option<&str>, timings: ReminderTimings) -> Self {
        let mut fsm = ReminderFsm::new(build_state_table(), ReminderState::Closed);
        let mut ctx = ReminderContext::new(timings);
        fsm.start(&mut ctx);
        Self {
            id,
            name: label(name),
            description: label(description.unwrap_or_default()),
            fsm,
            ctx,
        }
    }

    // ── Inputs ────────────────────────────────────────────────

    /// Apply a raw contact edge.  Returns `false` when the value is
    /// unchanged, in which case nothing is reported or emitted.
    pub fn set_open(
        &mut self,
        open: bool,
        now: Duration,
        report: &mut impl OpeningReport,
        sink: &mut impl EventSink,
    ) -> bool {
        if self.ctx.is_open == open {
            return false;
        }
        self.ctx.is_open = open;
        info!("{} - contact {}", self.name, if open { "opened" } else { "closed" });

        report.report_opening(self.id, open, sink);
        self.run(now, sink);
        true
    }

    /// Deliver every timer expiry due at `now`.
    ///
    /// Follow-up waits are armed from the deadline that fired, so a late
    /// poll catches up without stretching the reminder cadence.
    pub fn poll_timer(&mut self, now: Duration, sink: &mut impl EventSink) -> bool {
        let mut fired = false;
        while let Some(deadline) = self.ctx.timer.poll(now) {
            self.ctx.timer_expired = true;
            self.run(deadline, sink);
            fired = true;
        }
        fired
    }

    /// Update the ambient fast-remind flag.  A wait that is already
    /// armed keeps its duration.
    pub fn set_fast_remind(&mut self, enabled: bool) {
        self.ctx.fast_remind = enabled;
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_open(&self) -> bool {
        self.ctx.is_open
    }

    pub fn reminder_active(&self) -> bool {
        self.ctx.reminder_active
    }

    pub fn state(&self) -> ReminderState {
        self.fsm.current_state()
    }

    pub fn fast_remind(&self) -> bool {
        self.ctx.fast_remind
    }

    pub fn timings(&self) -> &ReminderTimings {
        &self.ctx.timings
    }

    /// Deadline of the single pending timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.ctx.timer.deadline()
    }

    /// Point-in-time view for status reporting.
    pub fn status(&self) -> UnitStatus {
        UnitStatus {
            id: self.id,
            name: self.name.clone(),
            is_open: self.ctx.is_open,
            reminder_active: self.ctx.reminder_active,
            state: self.state(),
            next_deadline_secs: self.next_deadline().map(|d| d.as_secs()),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn run(&mut self, at: Duration, sink: &mut impl EventSink) {
        self.ctx.now = at;
        let was_active = self.ctx.reminder_active;

        if let Some((from, to)) = self.fsm.step(&mut self.ctx) {
            info!(
                "{} - reminder {} -> {}",
                self.name,
                self.fsm.state_name(from),
                self.fsm.state_name(to)
            );
            sink.emit(&AppEvent::ReminderStateChanged {
                unit: self.id,
                from,
                to,
            });
        }

        if self.ctx.reminder_active != was_active {
            info!(
                "{} - updating reminder to {}",
                self.name, self.ctx.reminder_active
            );
            sink.emit(&AppEvent::ReminderActive {
                unit: self.id,
                active: self.ctx.reminder_active,
            });
        }
    }
}

/// Serialisable snapshot of one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStatus {
    pub id: UnitId,
    pub name: Label,
    pub is_open: bool,
    pub reminder_active: bool,
    pub state: ReminderState,
    pub next_deadline_secs: Option<u64>,
}
