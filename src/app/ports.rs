//! Port traits — the boundary between the automation core and the host.
//!
//! ```text
//!   Host adapter ──▶ Coordinator ──▶ EventSink ──▶ Host adapter
//! ```
//!
//! The host platform (accessory registry, UI characteristics, config
//! store) is an opaque black box.  It drives the core through the
//! [`Coordinator`](super::service::Coordinator) methods and observes it
//! through [`EventSink`].  Reminder units reach the security controller
//! only through [`OpeningReport`].

use core::fmt;

use crate::config::SystemConfig;
use crate::reminder::UnitId;

// ───────────────────────────────────────────────────────────────
// Event sink port (core → host characteristics / logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port, only when an observable value changes.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

/// Recording sink.
impl EventSink for Vec<super::events::AppEvent> {
    fn emit(&mut self, event: &super::events::AppEvent) {
        self.push(event.clone());
    }
}

// ───────────────────────────────────────────────────────────────
// Opening report port (reminder unit → security controller)
// ───────────────────────────────────────────────────────────────

/// Receives raw open/closed edges from reminder units.
///
/// Reports from one unit arrive in the order they were generated; the
/// receiver recomputes its aggregate state on every report.
pub trait OpeningReport {
    fn report_opening(&mut self, unit: UnitId, open: bool, sink: &mut impl EventSink);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (host config store → core)
// ───────────────────────────────────────────────────────────────

/// Loads the system configuration once at startup.
///
/// Missing durations are not an error; they resolve to defaults in
/// [`ReminderTimings::resolve`](crate::config::ReminderTimings::resolve).
pub trait ConfigPort {
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration source does not exist.
    NotFound,
    /// The configuration could not be deserialised.
    Corrupted(String),
    /// Generic I/O error from the configuration backend.
    IoError,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted(msg) => write!(f, "config corrupted: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
