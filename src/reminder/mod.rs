//! Function-pointer reminder state machine engine.
//!
//! One engine runs per configured window or door:
//!
//! ```text
//! ┌───────────┬───────────────┬────────────────┬─────────────────────┐
//! │ State     │ on_enter      │ on_exit        │ on_update           │
//! ├───────────┼───────────────┼────────────────┼─────────────────────┤
//! │ Closed    │ cancel timer  │ —              │ open → Opened       │
//! │ Opened    │ arm first/1s  │ —              │ closed / expired    │
//! │ Reminding │ assert, arm   │ clear reminder │ closed / expired    │
//! └───────────┴───────────────┴────────────────┴─────────────────────┘
//! ```
//!
//! The engine is stepped once per input event (a contact edge or a
//! timer expiry).  If `on_update` returns `Some(next)`, the engine runs
//! `on_exit` for the current state, then `on_enter` for the next.  All
//! handlers receive `&mut ReminderContext`.

pub mod context;
pub mod states;
pub mod unit;

use context::ReminderContext;
use log::debug;
use serde::Serialize;

pub use unit::{ReminderUnit, UnitId, UnitStatus};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Reminder states of a single opening.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ReminderState {
    Closed = 0,
    Opened = 1,
    Reminding = 2,
}

impl ReminderState {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert a table index back to `ReminderState`.  Out-of-range
    /// indices fall back to `Closed`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => Self::Opened,
            2 => Self::Reminding,
            _ => {
                debug_assert!(idx == 0, "invalid reminder state index: {idx}");
                Self::Closed
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type StateActionFn = fn(&mut ReminderContext);

/// Signature for the per-event update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut ReminderContext) -> Option<ReminderState>;

/// Static descriptor for a single reminder state.
pub struct StateDescriptor {
    pub id: ReminderState,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The reminder state machine engine.
pub struct ReminderFsm {
    /// Fixed-size table indexed by `ReminderState as usize`.
    table: [StateDescriptor; ReminderState::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl ReminderFsm {
    /// Panics in debug builds when a descriptor sits at the wrong index.
    pub fn new(table: [StateDescriptor; ReminderState::COUNT], initial: ReminderState) -> Self {
        for (idx, desc) in table.iter().enumerate() {
            debug_assert_eq!(
                desc.id as usize, idx,
                "state table out of order at {}",
                desc.name
            );
        }
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    pub fn start(&mut self, ctx: &mut ReminderContext) {
        ctx.previous = None;
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Process one input event.
    ///
    /// Consumes `ctx.timer_expired` and returns `(from, to)` when a
    /// transition was taken.
    pub fn step(&mut self, ctx: &mut ReminderContext) -> Option<(ReminderState, ReminderState)> {
        let next = (self.table[self.current].on_update)(ctx);
        ctx.timer_expired = false;

        let next = next?;
        let from = self.current_state();
        self.transition(next, ctx);
        Some((from, next))
    }

    pub fn current_state(&self) -> ReminderState {
        ReminderState::from_index(self.current)
    }

    /// Human-readable name of a state, as recorded in the table.
    pub fn state_name(&self, state: ReminderState) -> &'static str {
        self.table[state as usize].name
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: ReminderState, ctx: &mut ReminderContext) {
        let next_idx = next as usize;

        debug!(
            "reminder transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        ctx.previous = Some(self.current_state());
        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
