//! Outbound application events.
//!
//! The [`Coordinator`](super::service::Coordinator) and the state
//! machines it owns emit these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side update the host's characteristics, log, or record them.
//!
//! `ReminderActive`, `ArmStateChanged` and `WarningActive` are the
//! observer boundary proper; they fire only when the value changes.

use serde::Serialize;

use crate::reminder::{ReminderState, UnitId};
use crate::security::CurrentState;

/// Structured events emitted by the automation core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AppEvent {
    /// The coordinator has started with this many reminder units.
    Started { units: usize },

    /// A unit's reminder output changed.
    ReminderActive { unit: UnitId, active: bool },

    /// A unit's reminder state machine moved.
    ReminderStateChanged {
        unit: UnitId,
        from: ReminderState,
        to: ReminderState,
    },

    /// The security system's current state changed.
    ArmStateChanged { from: CurrentState, to: CurrentState },

    /// The "forgot to close a window" warning changed.
    WarningActive(bool),

    /// The global fast-remind switch changed.
    FastRemindChanged(bool),
}
