//! Security arming state machine.
//!
//! The controller aggregates the last known contact state of every
//! reminder unit and recomputes on **every input**: a target-state
//! change or any opening report.
//!
//! ## Recompute
//!
//! 1. `any_open` = OR over every known sensor.
//! 2. While `ALARM_TRIGGERED`, nothing happens until the target is
//!    `Disarm`.  The alarm is sticky.
//! 3. Dispatch on the target:
//!    - `Disarm` / `StayArm`: go to the matching state unconditionally,
//!      clear the warning.
//!    - `AwayArm` / `NightArm`, not yet in the matching armed state:
//!      an open sensor blocks arming and raises the warning; otherwise
//!      arm and clear the warning.
//!    - `AwayArm` / `NightArm`, already armed: an open sensor triggers
//!      the alarm.
//! 4. Outputs are emitted only when their value changes, current state
//!    first.

use core::fmt;
use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::Serialize;

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, OpeningReport};
use crate::reminder::UnitId;
use crate::reminder::unit::{Label, label};

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// Occupant-requested mode.  Discriminants are the host's
/// `SecuritySystemTargetState` characteristic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TargetState {
    StayArm = 0,
    AwayArm = 1,
    NightArm = 2,
    Disarm = 3,
}

impl TargetState {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::StayArm),
            1 => Some(Self::AwayArm),
            2 => Some(Self::NightArm),
            3 => Some(Self::Disarm),
            _ => None,
        }
    }

    /// The current state this target settles in once armed.
    pub fn armed_state(self) -> CurrentState {
        match self {
            Self::StayArm => CurrentState::StayArmed,
            Self::AwayArm => CurrentState::AwayArmed,
            Self::NightArm => CurrentState::NightArmed,
            Self::Disarm => CurrentState::Disarmed,
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StayArm => "STAY_ARM",
            Self::AwayArm => "AWAY_ARM",
            Self::NightArm => "NIGHT_ARM",
            Self::Disarm => "DISARM",
        })
    }
}

/// Actual mode.  Discriminants are the host's
/// `SecuritySystemCurrentState` characteristic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum CurrentState {
    StayArmed = 0,
    AwayArmed = 1,
    NightArmed = 2,
    Disarmed = 3,
    AlarmTriggered = 4,
}

impl fmt::Display for CurrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StayArmed => "STAY_ARMED",
            Self::AwayArmed => "AWAY_ARMED",
            Self::NightArmed => "NIGHT_ARMED",
            Self::Disarmed => "DISARMED",
            Self::AlarmTriggered => "ALARM_TRIGGERED",
        })
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Aggregates opening reports and runs the arming state machine.
pub struct SecurityController {
    name: Label,
    target: TargetState,
    current: CurrentState,
    warning: bool,
    /// Last known contact state per unit.
    sensors: BTreeMap<UnitId, bool>,
}

impl SecurityController {
    /// Start disarmed with no warning and no known sensors.
    pub fn new(name: &str) -> Self {
        Self {
            name: label(name),
            target: TargetState::Disarm,
            current: CurrentState::Disarmed,
            warning: false,
            sensors: BTreeMap::new(),
        }
    }

    /// Record a unit as closed without recomputing.
    pub fn register_sensor(&mut self, unit: UnitId) {
        self.sensors.insert(unit, false);
    }

    /// Apply an occupant request.  An unchanged target is a no-op.
    pub fn set_target_state(&mut self, target: TargetState, sink: &mut impl EventSink) {
        if self.target == target {
            return;
        }
        info!("{} - setting target state: {}", self.name, target);
        self.target = target;
        self.recompute(sink);
    }

    /// Apply an occupant request given as the host's numeric value.
    /// Unrecognised values leave every output unchanged.
    pub fn set_target_state_raw(&mut self, raw: u8, sink: &mut impl EventSink) {
        match TargetState::from_u8(raw) {
            Some(target) => self.set_target_state(target, sink),
            None => warn!("{} - ignoring unknown target state {}", self.name, raw),
        }
    }

    // ── Queries ───────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_state(&self) -> TargetState {
        self.target
    }

    pub fn current_state(&self) -> CurrentState {
        self.current
    }

    pub fn warning_active(&self) -> bool {
        self.warning
    }

    /// True if any known sensor is open.
    pub fn any_open(&self) -> bool {
        self.sensors.values().any(|&open| open)
    }

    /// Last known state of one sensor, `None` if it never reported.
    pub fn sensor_state(&self, unit: UnitId) -> Option<bool> {
        self.sensors.get(&unit).copied()
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    // ── Internal ──────────────────────────────────────────────────

    fn recompute(&mut self, sink: &mut impl EventSink) {
        if self.current == CurrentState::AlarmTriggered && self.target != TargetState::Disarm {
            debug!("{} - alarm latched, waiting for disarm", self.name);
            return;
        }

        let any_open = self.any_open();
        let mut next = self.current;
        let mut warning = self.warning;

        match self.target {
            TargetState::Disarm | TargetState::StayArm => {
                next = self.target.armed_state();
                warning = false;
            }
            TargetState::AwayArm | TargetState::NightArm => {
                let armed = self.target.armed_state();
                if self.current != armed {
                    if any_open {
                        warning = true;
                    } else {
                        warning = false;
                        next = armed;
                    }
                } else if any_open {
                    next = CurrentState::AlarmTriggered;
                }
            }
        }

        if next != self.current {
            info!("{} - updating current state to {}", self.name, next);
            let from = self.current;
            self.current = next;
            sink.emit(&AppEvent::ArmStateChanged { from, to: next });
        }
        if warning != self.warning {
            info!(
                "{} - updating current forgot_window_warning state to {}",
                self.name, warning
            );
            self.warning = warning;
            sink.emit(&AppEvent::WarningActive(warning));
        }
    }
}

impl OpeningReport for SecurityController {
    fn report_opening(&mut self, unit: UnitId, open: bool, sink: &mut impl EventSink) {
        self.sensors.insert(unit, open);
        self.recompute(sink);
    }
}
