//! Recording event sink for integration tests.
//!
//! Keeps the full event history so tests can assert on exactly which
//! observer notifications fired, and in what order.

use std::time::Duration;

use homesecurity::app::events::AppEvent;
use homesecurity::app::ports::EventSink;
use homesecurity::app::service::Coordinator;
use homesecurity::config::{OpeningConfig, SystemConfig};
use homesecurity::reminder::UnitId;
use homesecurity::security::CurrentState;

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// `ReminderActive` values emitted for one unit, in order.
    pub fn reminder_edges(&self, unit: UnitId) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ReminderActive { unit: u, active } if *u == unit => Some(*active),
                _ => None,
            })
            .collect()
    }

    /// Target states of every `ArmStateChanged`, in order.
    pub fn arm_states(&self) -> Vec<CurrentState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ArmStateChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::WarningActive(w) => Some(*w),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

pub fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

/// Coordinator over `names` with default timings.
#[allow(dead_code)]
pub fn coordinator(names: &[&str]) -> (Coordinator, RecordingSink) {
    let config = SystemConfig {
        windows_and_doors: names.iter().map(|n| OpeningConfig::named(n)).collect(),
        ..Default::default()
    };
    let mut c = Coordinator::new(&config);
    let mut sink = RecordingSink::new();
    c.start(&mut sink);
    sink.clear();
    (c, sink)
}
