//! Inbound commands to the coordinator.
//!
//! These represent actions requested by the host (contact sensor relay,
//! security system UI, fast-remind switch) that the
//! [`Coordinator`](super::service::Coordinator) dispatches to the
//! matching state machine.

use crate::reminder::UnitId;
use crate::security::TargetState;

/// Commands that host adapters can send into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Raw contact edge for one opening (true = open).
    SetOpen { unit: UnitId, open: bool },

    /// Occupant-requested security mode.
    SetTargetState(TargetState),

    /// Occupant-requested mode as the host's numeric characteristic
    /// value.  Unrecognised values are ignored.
    SetTargetStateRaw(u8),

    /// Global fast cyclic remind switch.
    SetFastRemind(bool),
}
