//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every application event through
//! the `log` facade.  A host accessory bridge would implement the same
//! trait and update its characteristics instead.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { units } => {
                info!("START | units={units}");
            }
            AppEvent::ReminderActive { unit, active } => {
                info!("REMIND | unit={unit} active={active}");
            }
            AppEvent::ReminderStateChanged { unit, from, to } => {
                info!("UNIT | unit={unit} {:?} -> {:?}", from, to);
            }
            AppEvent::ArmStateChanged { from, to } => {
                info!("ARM | {from} -> {to}");
            }
            AppEvent::WarningActive(active) => {
                info!("WARN | forgot_window_warning={active}");
            }
            AppEvent::FastRemindChanged(enabled) => {
                info!("FAST | fast_cyclic_remind={enabled}");
            }
        }
    }
}
