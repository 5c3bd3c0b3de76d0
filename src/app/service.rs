//! Coordinator, the hexagonal core.
//!
//! [`Coordinator`] owns the fixed set of reminder units and the single
//! security controller.  It wires every unit's opening reports into the
//! controller and fans the global fast-remind switch out to every unit.
//! All I/O flows through port traits injected at call sites, making the
//! whole core testable with mock adapters.
//!
//! ```text
//!  set_open ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!               │         Coordinator         │
//!  tick(now) ──▶│  units[] ──▶ Security ctrl  │
//!               └─────────────────────────────┘
//! ```

use core::time::Duration;

use log::{info, warn};
use serde::Serialize;

use crate::config::{ReminderTimings, SystemConfig};
use crate::reminder::{ReminderUnit, UnitId, UnitStatus};
use crate::security::{CurrentState, SecurityController, TargetState};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// Coordinator
// ───────────────────────────────────────────────────────────────

/// Fan-out and wiring layer over the two state machines.
pub struct Coordinator {
    security: SecurityController,
    units: Vec<ReminderUnit>,
    fast_remind: bool,
}

impl Coordinator {
    /// Build the controller, then one unit per named opening.
    ///
    /// Units get serial ids from 1 in configuration order and register
    /// as closed with the controller.  Unnamed entries are skipped and do
    /// not consume an id.
    pub fn new(config: &SystemConfig) -> Self {
        let mut security = SecurityController::new(config.security_system_name());
        let mut units = Vec::with_capacity(config.windows_and_doors.len());

        for (index, opening) in config.windows_and_doors.iter().enumerate() {
            let Some(name) = opening.name.as_deref().filter(|n| !n.is_empty()) else {
                warn!("windows_and_doors[{index}] has no name, skipping");
                continue;
            };
            let Ok(id) = UnitId::try_from(units.len() + 1) else {
                warn!("too many windows and doors, ignoring '{name}'");
                break;
            };
            let timings = ReminderTimings::resolve(opening, config);
            info!(
                "{name} - serial {id}, first remind {}s, fast {}s, slow {}s",
                timings.first_remind.as_secs(),
                timings.fast_cyclic_remind.as_secs(),
                timings.slow_cyclic_remind.as_secs()
            );
            security.register_sensor(id);
            units.push(ReminderUnit::new(
                id,
                name,
                opening.description.as_deref(),
                timings,
            ));
        }

        if units.is_empty() {
            warn!("no windows or doors configured");
        }

        Self {
            security,
            units,
            fast_remind: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            units: self.units.len(),
        });
        info!(
            "{} started with {} window(s)/door(s)",
            self.security.name(),
            self.units.len()
        );
    }

    // ── Control boundary ──────────────────────────────────────

    /// Raw contact edge for one unit.  Unknown ids are ignored.
    pub fn set_open(&mut self, unit: UnitId, open: bool, now: Duration, sink: &mut impl EventSink) {
        let Some(target) = self.units.iter_mut().find(|u| u.id() == unit) else {
            warn!("ignoring contact change for unknown unit {unit}");
            return;
        };
        target.set_open(open, now, &mut self.security, sink);
    }

    pub fn set_target_state(&mut self, target: TargetState, sink: &mut impl EventSink) {
        self.security.set_target_state(target, sink);
    }

    pub fn set_target_state_raw(&mut self, raw: u8, sink: &mut impl EventSink) {
        self.security.set_target_state_raw(raw, sink);
    }

    /// Store and broadcast the fast-remind switch, only when it changed.
    pub fn set_fast_remind(&mut self, enabled: bool, sink: &mut impl EventSink) {
        if self.fast_remind == enabled {
            return;
        }
        info!("setting fast cyclic remind to {enabled}");
        self.fast_remind = enabled;
        for unit in &mut self.units {
            unit.set_fast_remind(enabled);
        }
        sink.emit(&AppEvent::FastRemindChanged(enabled));
    }

    /// Dispatch one control-boundary command.
    pub fn handle_command(&mut self, cmd: AppCommand, now: Duration, sink: &mut impl EventSink) {
        match cmd {
            AppCommand::SetOpen { unit, open } => self.set_open(unit, open, now, sink),
            AppCommand::SetTargetState(target) => self.set_target_state(target, sink),
            AppCommand::SetTargetStateRaw(raw) => self.set_target_state_raw(raw, sink),
            AppCommand::SetFastRemind(enabled) => self.set_fast_remind(enabled, sink),
        }
    }

    // ── Timers ────────────────────────────────────────────────

    /// Process every timer due at `now`.  Returns the number of units
    /// that had at least one expiry.
    pub fn tick(&mut self, now: Duration, sink: &mut impl EventSink) -> usize {
        let mut fired = 0;
        for unit in &mut self.units {
            if unit.poll_timer(now, sink) {
                fired += 1;
            }
        }
        fired
    }

    /// Earliest pending deadline across all units.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.units.iter().filter_map(ReminderUnit::next_deadline).min()
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn unit(&self, id: UnitId) -> Option<&ReminderUnit> {
        self.units.iter().find(|u| u.id() == id)
    }

    pub fn units(&self) -> &[ReminderUnit] {
        &self.units
    }

    pub fn security(&self) -> &SecurityController {
        &self.security
    }

    pub fn fast_remind(&self) -> bool {
        self.fast_remind
    }

    /// Snapshot of every observable value.
    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            target_state: self.security.target_state(),
            current_state: self.security.current_state(),
            warning_active: self.security.warning_active(),
            fast_remind: self.fast_remind,
            units: self.units.iter().map(ReminderUnit::status).collect(),
        }
    }
}

/// Serialisable view of the whole system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub target_state: TargetState,
    pub current_state: CurrentState,
    pub warning_active: bool,
    pub fast_remind: bool,
    pub units: Vec<UnitStatus>,
}
