//! Concrete reminder state handlers and table builder.
//!
//! ```text
//!  CLOSED ──[open]──▶ OPENED ──[timer]──▶ REMINDING
//!    ▲                 │  ▲                   │
//!    │     [closed]    │  └──[timer, 1s blink]┘
//!    └─────────────────┴──────[closed]────────┘
//! ```
//!
//! Every state that waits arms the unit's single timer slot on entry,
//! which replaces whatever was pending.  Closing always lands in CLOSED,
//! whose entry cancels the slot.

use log::debug;

use super::context::{REMINDER_BLINK, ReminderContext};
use super::{ReminderState, StateDescriptor};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the reminder state table.  Called once per unit.
pub fn build_state_table() -> [StateDescriptor; ReminderState::COUNT] {
    [
        // Index 0 — Closed
        StateDescriptor {
            id: ReminderState::Closed,
            name: "Closed",
            on_enter: Some(closed_enter),
            on_exit: None,
            on_update: closed_update,
        },
        // Index 1 — Opened
        StateDescriptor {
            id: ReminderState::Opened,
            name: "Opened",
            on_enter: Some(opened_enter),
            on_exit: None,
            on_update: opened_update,
        },
        // Index 2 — Reminding
        StateDescriptor {
            id: ReminderState::Reminding,
            name: "Reminding",
            on_enter: Some(reminding_enter),
            on_exit: Some(reminding_exit),
            on_update: reminding_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  CLOSED
// ═══════════════════════════════════════════════════════════════════════════

fn closed_enter(ctx: &mut ReminderContext) {
    ctx.timer.cancel();
}

fn closed_update(ctx: &mut ReminderContext) -> Option<ReminderState> {
    ctx.is_open.then_some(ReminderState::Opened)
}

// ═══════════════════════════════════════════════════════════════════════════
//  OPENED — waiting for the first reminder, or blinking between reminders
// ═══════════════════════════════════════════════════════════════════════════

fn opened_enter(ctx: &mut ReminderContext) {
    let delay = if ctx.previous == Some(ReminderState::Reminding) {
        REMINDER_BLINK
    } else {
        ctx.timings.first_remind
    };
    ctx.timer.start(ctx.now, delay);
    debug!("OPENED: next reminder in {}s", delay.as_secs());
}

fn opened_update(ctx: &mut ReminderContext) -> Option<ReminderState> {
    if !ctx.is_open {
        return Some(ReminderState::Closed);
    }
    if ctx.timer_expired {
        return Some(ReminderState::Reminding);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  REMINDING — reminder asserted until the cyclic wait runs out
// ═══════════════════════════════════════════════════════════════════════════

fn reminding_enter(ctx: &mut ReminderContext) {
    ctx.reminder_active = true;
    // Fast/slow is sampled here and nowhere else.
    let wait = ctx.cyclic_wait();
    ctx.timer.start(ctx.now, wait);
    debug!(
        "REMINDING: {} cadence, blink in {}s",
        if ctx.fast_remind { "fast" } else { "slow" },
        wait.as_secs()
    );
}

fn reminding_exit(ctx: &mut ReminderContext) {
    ctx.reminder_active = false;
}

fn reminding_update(ctx: &mut ReminderContext) -> Option<ReminderState> {
    if !ctx.is_open {
        return Some(ReminderState::Closed);
    }
    if ctx.timer_expired {
        return Some(ReminderState::Opened);
    }
    None
}
