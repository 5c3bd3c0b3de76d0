//! Configuration loading through the file adapter into the coordinator.

use std::fs;
use std::path::PathBuf;

use homesecurity::adapters::config_file::{JsonConfigFile, parse_config};
use homesecurity::app::ports::{ConfigError, ConfigPort};
use homesecurity::app::service::Coordinator;

use crate::mock_sink::{RecordingSink, secs};

const PLUGIN_JSON: &str = r#"{
    "platform": "HomeSecurityLitePlatform",
    "name": "HomeSecurityLite",
    "first_remind": 600,
    "fast_cyclic_remind": 60,
    "security_system_name": "Alarm",
    "windows_and_doors": [
        { "name": "Kitchen", "first_remind": 30 },
        { "description": "no name" },
        { "name": "Bedroom", "slow_cyclic_remind": 0 }
    ]
}"#;

#[test]
fn plugin_config_builds_units_with_resolved_timings() {
    let cfg = parse_config(PLUGIN_JSON).unwrap();
    let c = Coordinator::new(&cfg);
    assert_eq!(c.units().len(), 2);
    assert_eq!(c.security().name(), "Alarm");

    let kitchen = c.unit(1).unwrap();
    assert_eq!(kitchen.name(), "Kitchen");
    assert_eq!(kitchen.timings().first_remind, secs(30));
    assert_eq!(kitchen.timings().fast_cyclic_remind, secs(60));

    let bedroom = c.unit(2).unwrap();
    assert_eq!(bedroom.name(), "Bedroom");
    assert_eq!(bedroom.timings().first_remind, secs(600));
    assert_eq!(bedroom.timings().slow_cyclic_remind, secs(1800));
}

#[test]
fn configured_first_remind_drives_timer() {
    let cfg = parse_config(PLUGIN_JSON).unwrap();
    let mut c = Coordinator::new(&cfg);
    let mut sink = RecordingSink::new();
    c.set_open(1, true, secs(0), &mut sink);
    c.tick(secs(30), &mut sink);
    assert_eq!(sink.reminder_edges(1), vec![true]);
}

#[test]
fn file_adapter_reports_missing_and_corrupt() {
    let dir = std::env::temp_dir();
    let missing: PathBuf = dir.join(format!("hs-it-{}-missing.json", std::process::id()));
    assert_eq!(
        JsonConfigFile::new(&missing).load().unwrap_err(),
        ConfigError::NotFound
    );

    let bad = dir.join(format!("hs-it-{}-bad.json", std::process::id()));
    fs::write(&bad, "[1, 2").unwrap();
    let err = JsonConfigFile::new(&bad).load().unwrap_err();
    let _ = fs::remove_file(&bad);
    assert!(matches!(err, ConfigError::Corrupted(_)));
}

#[test]
fn empty_config_has_no_units() {
    let cfg = parse_config("{}").unwrap();
    let mut c = Coordinator::new(&cfg);
    let mut sink = RecordingSink::new();
    c.start(&mut sink);
    assert!(c.units().is_empty());
    assert_eq!(c.next_deadline(), None);
    assert_eq!(c.security().name(), "Security system");
}
