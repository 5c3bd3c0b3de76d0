//! Inter-thread control channel.
//!
//! Uses an `embassy-sync` bounded channel to bridge the console input
//! thread with the synchronous control loop.  The control loop is the
//! single owner of the [`Coordinator`](crate::app::service::Coordinator);
//! every input reaches it through here, one message at a time.
//!
//! ```text
//! ┌──────────────┐  ControlMsg  ┌──────────────┐
//! │ Console task │─────────────▶│ Control loop │
//! └──────────────┘              └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::commands::AppCommand;

/// Message delivered to the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMsg {
    /// Forward to [`Coordinator::handle_command`](crate::app::service::Coordinator::handle_command).
    Command(AppCommand),
    /// Log a status snapshot.
    Status,
    /// Leave the control loop.
    Quit,
}

/// Channel depth for control messages.
pub const CONTROL_DEPTH: usize = 16;

/// Inbound control channel: console → control loop.
pub static CONTROL_CHANNEL: Channel<CriticalSectionRawMutex, ControlMsg, CONTROL_DEPTH> =
    Channel::new();
