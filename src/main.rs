//! Home security host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  JsonConfigFile   LogEventSink   MonotonicClock  Console │
//! │  (ConfigPort)     (EventSink)    (now)           (input) │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────         │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            Coordinator (pure logic)                │  │
//! │  │   ReminderUnit × N  ──▶  SecurityController        │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use homesecurity::adapters::config_file::JsonConfigFile;
use homesecurity::adapters::console;
use homesecurity::adapters::log_sink::LogEventSink;
use homesecurity::adapters::time::MonotonicClock;
use homesecurity::app::ports::{ConfigError, ConfigPort};
use homesecurity::app::service::Coordinator;
use homesecurity::channels::{CONTROL_CHANNEL, ControlMsg};
use homesecurity::config::SystemConfig;

/// Config path when none is given on the command line.
const DEFAULT_CONFIG_PATH: &str = "homesecurity.json";

/// Upper bound on one control loop sleep.
const POLL_PERIOD: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("homesecurity v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let store = JsonConfigFile::new(&path);
    let config = match store.load() {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound) => {
            warn!("{path} not found, running with defaults");
            SystemConfig::default()
        }
        Err(e) => {
            return Err(homesecurity::error::Error::from(e))
                .with_context(|| format!("loading {path}"));
        }
    };

    // ── 3. Core ───────────────────────────────────────────────
    let mut sink = LogEventSink::new();
    let clock = MonotonicClock::new();
    let mut coordinator = Coordinator::new(&config);
    coordinator.start(&mut sink);

    // ── 4. Input ──────────────────────────────────────────────
    let _reader = console::spawn_reader().context("spawning console reader")?;
    info!("commands: open <id> | close <id> | arm <stay|away|night|disarm|0-3> | fast <on|off> | status | quit");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        while let Ok(msg) = CONTROL_CHANNEL.try_receive() {
            match msg {
                ControlMsg::Command(cmd) => {
                    info!("command: {cmd:?}");
                    coordinator.handle_command(cmd, clock.now(), &mut sink);
                }
                ControlMsg::Status => {
                    let status = serde_json::to_string(&coordinator.status())
                        .context("serialising status")?;
                    info!("status: {status}");
                }
                ControlMsg::Quit => {
                    info!("shutting down after {}s", clock.uptime_secs());
                    return Ok(());
                }
            }
        }

        let now = clock.now();
        coordinator.tick(now, &mut sink);

        let sleep = coordinator
            .next_deadline()
            .map_or(POLL_PERIOD, |d| d.saturating_sub(now).min(POLL_PERIOD));
        thread::sleep(sleep);
    }
}
