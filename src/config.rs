//! System configuration parameters
//!
//! Read once from the host plugin's JSON configuration at startup.
//! Reminder durations resolve per opening: the opening's own value,
//! then the global value, then the built-in default.  Zero counts as
//! unset, matching the host plugin's falsy fallback.

use core::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before the first reminder (seconds).
pub const DEFAULT_FIRST_REMIND_SECS: u32 = 900;
/// Default cyclic reminder period while fast remind is on (seconds).
pub const DEFAULT_FAST_CYCLIC_REMIND_SECS: u32 = 120;
/// Default cyclic reminder period while fast remind is off (seconds).
pub const DEFAULT_SLOW_CYCLIC_REMIND_SECS: u32 = 1800;
/// Default display name of the security system.
pub const DEFAULT_SECURITY_SYSTEM_NAME: &str = "Security system";

/// Core system configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Global first-remind delay (seconds)
    pub first_remind: Option<u32>,
    /// Global fast cyclic remind period (seconds)
    pub fast_cyclic_remind: Option<u32>,
    /// Global slow cyclic remind period (seconds)
    pub slow_cyclic_remind: Option<u32>,
    /// Display name of the security system (log prefix)
    pub security_system_name: Option<String>,
    /// Configured windows and doors, in serial order
    pub windows_and_doors: Vec<OpeningConfig>,
}

/// One configured window or door.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    /// Entries without a name are skipped at startup.
    pub name: Option<String>,
    pub description: Option<String>,
    pub first_remind: Option<u32>,
    pub fast_cyclic_remind: Option<u32>,
    pub slow_cyclic_remind: Option<u32>,
}

impl OpeningConfig {
    /// Convenience constructor for a named opening with inherited timings.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }
}

impl SystemConfig {
    /// Display name of the security system, falling back to the default.
    pub fn security_system_name(&self) -> &str {
        self.security_system_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_SECURITY_SYSTEM_NAME)
    }
}

/// Fully resolved reminder durations for one opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReminderTimings {
    pub first_remind: Duration,
    pub fast_cyclic_remind: Duration,
    pub slow_cyclic_remind: Duration,
}

impl Default for ReminderTimings {
    fn default() -> Self {
        Self::from_secs(
            DEFAULT_FIRST_REMIND_SECS,
            DEFAULT_FAST_CYCLIC_REMIND_SECS,
            DEFAULT_SLOW_CYCLIC_REMIND_SECS,
        )
    }
}

impl ReminderTimings {
    pub fn from_secs(first: u32, fast: u32, slow: u32) -> Self {
        Self {
            first_remind: Duration::from_secs(u64::from(first)),
            fast_cyclic_remind: Duration::from_secs(u64::from(fast)),
            slow_cyclic_remind: Duration::from_secs(u64::from(slow)),
        }
    }

    /// Resolve opening → global → default for each duration.
    pub fn resolve(opening: &OpeningConfig, global: &SystemConfig) -> Self {
        Self::from_secs(
            pick(opening.first_remind, global.first_remind, DEFAULT_FIRST_REMIND_SECS),
            pick(
                opening.fast_cyclic_remind,
                global.fast_cyclic_remind,
                DEFAULT_FAST_CYCLIC_REMIND_SECS,
            ),
            pick(
                opening.slow_cyclic_remind,
                global.slow_cyclic_remind,
                DEFAULT_SLOW_CYCLIC_REMIND_SECS,
            ),
        )
    }

    /// Cyclic period for the current fast-remind setting.
    pub fn cyclic_remind(&self, fast: bool) -> Duration {
        if fast {
            self.fast_cyclic_remind
        } else {
            self.slow_cyclic_remind
        }
    }
}

fn pick(unit: Option<u32>, global: Option<u32>, default: u32) -> u32 {
    unit.filter(|&s| s > 0)
        .or_else(|| global.filter(|&s| s > 0))
        .unwrap_or(default)
}
