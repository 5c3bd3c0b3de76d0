//! End-to-end scenarios through the coordinator.

use homesecurity::app::commands::AppCommand;
use homesecurity::app::events::AppEvent;
use homesecurity::reminder::ReminderState;
use homesecurity::security::{CurrentState, TargetState};

use crate::mock_sink::{coordinator, secs};

// ── Reminder cadence ──────────────────────────────────────────

#[test]
fn open_unit_reaches_reminding_after_first_delay() {
    let (mut c, mut sink) = coordinator(&["Kitchen"]);
    c.set_open(1, true, secs(0), &mut sink);
    assert_eq!(c.unit(1).map(|u| u.state()), Some(ReminderState::Opened));

    c.tick(secs(899), &mut sink);
    assert!(sink.reminder_edges(1).is_empty());

    c.tick(secs(900), &mut sink);
    let unit = c.unit(1).unwrap();
    assert_eq!(unit.state(), ReminderState::Reminding);
    assert!(unit.reminder_active());
    assert_eq!(sink.reminder_edges(1), vec![true]);
}

#[test]
fn slow_cycle_blinks_reminder_once_per_period() {
    let (mut c, mut sink) = coordinator(&["Kitchen"]);
    c.set_open(1, true, secs(0), &mut sink);
    c.tick(secs(900), &mut sink);
    assert_eq!(c.next_deadline(), Some(secs(900 + 1799)));

    c.tick(secs(900 + 1799), &mut sink);
    assert!(!c.unit(1).unwrap().reminder_active());
    assert_eq!(c.next_deadline(), Some(secs(900 + 1800)));

    c.tick(secs(900 + 1800), &mut sink);
    assert!(c.unit(1).unwrap().reminder_active());
    assert_eq!(sink.reminder_edges(1), vec![true, false, true]);
}

#[test]
fn fast_remind_does_not_shorten_running_first_wait() {
    let (mut c, mut sink) = coordinator(&["Kitchen"]);
    c.set_open(1, true, secs(0), &mut sink);
    c.set_fast_remind(true, &mut sink);
    assert_eq!(c.next_deadline(), Some(secs(900)));

    c.tick(secs(900), &mut sink);
    assert_eq!(c.next_deadline(), Some(secs(900 + 119)));
}

#[test]
fn closing_stops_reminders() {
    let (mut c, mut sink) = coordinator(&["Kitchen"]);
    c.set_open(1, true, secs(0), &mut sink);
    c.tick(secs(900), &mut sink);
    c.set_open(1, false, secs(1000), &mut sink);
    assert_eq!(c.next_deadline(), None);
    assert_eq!(sink.reminder_edges(1), vec![true, false]);

    c.tick(secs(100_000), &mut sink);
    assert_eq!(sink.reminder_edges(1), vec![true, false]);
}

// ── Arming ────────────────────────────────────────────────────

#[test]
fn away_arm_blocked_until_last_opening_closes() {
    let (mut c, mut sink) = coordinator(&["A", "B"]);
    c.set_open(1, true, secs(0), &mut sink);
    c.set_target_state(TargetState::AwayArm, &mut sink);
    assert!(c.security().warning_active());
    assert_eq!(c.security().current_state(), CurrentState::Disarmed);

    c.set_open(1, false, secs(5), &mut sink);
    assert_eq!(c.security().current_state(), CurrentState::AwayArmed);
    assert!(!c.security().warning_active());
    assert_eq!(sink.warnings(), vec![true, false]);
    assert_eq!(sink.arm_states(), vec![CurrentState::AwayArmed]);
}

#[test]
fn opening_while_armed_alarms_until_disarm() {
    let (mut c, mut sink) = coordinator(&["A", "B"]);
    c.set_target_state(TargetState::AwayArm, &mut sink);
    assert_eq!(c.security().current_state(), CurrentState::AwayArmed);

    c.set_open(1, true, secs(1), &mut sink);
    assert_eq!(c.security().current_state(), CurrentState::AlarmTriggered);
    assert!(sink.warnings().is_empty());

    c.set_open(1, false, secs(2), &mut sink);
    c.set_target_state(TargetState::NightArm, &mut sink);
    assert_eq!(c.security().current_state(), CurrentState::AlarmTriggered);

    c.set_target_state(TargetState::Disarm, &mut sink);
    assert_eq!(c.security().current_state(), CurrentState::Disarmed);
    assert_eq!(
        sink.arm_states(),
        vec![
            CurrentState::AwayArmed,
            CurrentState::AlarmTriggered,
            CurrentState::Disarmed
        ]
    );
}

#[test]
fn duplicate_set_open_is_silent() {
    let (mut c, mut sink) = coordinator(&["A"]);
    c.set_target_state(TargetState::NightArm, &mut sink);
    c.set_open(1, true, secs(0), &mut sink);
    let count = sink.events.len();
    c.set_open(1, true, secs(1), &mut sink);
    assert_eq!(sink.events.len(), count);
}

#[test]
fn unknown_raw_target_changes_nothing() {
    let (mut c, mut sink) = coordinator(&["A"]);
    c.handle_command(AppCommand::SetTargetStateRaw(42), secs(0), &mut sink);
    assert!(sink.events.is_empty());
    assert_eq!(c.security().target_state(), TargetState::Disarm);
}

#[test]
fn report_reaches_controller_before_reminder_state() {
    let (mut c, mut sink) = coordinator(&["A"]);
    c.set_target_state(TargetState::AwayArm, &mut sink);
    sink.clear();
    c.set_open(1, true, secs(0), &mut sink);
    assert!(matches!(sink.events[0], AppEvent::ArmStateChanged { .. }));
    assert!(matches!(
        sink.events[1],
        AppEvent::ReminderStateChanged {
            to: ReminderState::Opened,
            ..
        }
    ));
}

#[test]
fn reminders_keep_running_while_alarm_latched() {
    let (mut c, mut sink) = coordinator(&["A"]);
    c.set_target_state(TargetState::AwayArm, &mut sink);
    c.set_open(1, true, secs(0), &mut sink);
    c.tick(secs(900), &mut sink);
    assert!(c.unit(1).unwrap().reminder_active());
    assert_eq!(c.security().current_state(), CurrentState::AlarmTriggered);
}
