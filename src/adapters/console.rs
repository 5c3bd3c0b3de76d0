//! Line-oriented console adapter.
//!
//! Stands in for the host accessory bridge: each line on stdin becomes
//! one [`ControlMsg`] sent on [`CONTROL_CHANNEL`], waiting for room when
//! the control loop falls behind.
//!
//! | Line                        | Message                        |
//! |-----------------------------|--------------------------------|
//! | `open <id>` / `close <id>`  | `SetOpen`                      |
//! | `arm stay\|away\|night\|disarm` | `SetTargetState`           |
//! | `arm <n>`                   | `SetTargetStateRaw(n)`         |
//! | `fast on\|off`              | `SetFastRemind`                |
//! | `status`                    | `Status`                       |
//! | `quit`                      | `Quit`                         |

use std::io::{self, BufRead};
use std::thread;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use futures_lite::future::block_on;
use log::{debug, info, warn};

use crate::app::commands::AppCommand;
use crate::channels::{CONTROL_CHANNEL, ControlMsg};
use crate::error::{CommandError, Error};
use crate::reminder::UnitId;
use crate::security::TargetState;

/// Parse one console line.
pub fn parse_line(line: &str) -> core::result::Result<ControlMsg, CommandError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(CommandError::Empty)?;
    let arg = words.next();

    let msg = match verb.to_ascii_lowercase().as_str() {
        "open" | "close" => {
            let unit = parse_unit(arg)?;
            ControlMsg::Command(AppCommand::SetOpen {
                unit,
                open: verb.eq_ignore_ascii_case("open"),
            })
        }
        "arm" => ControlMsg::Command(parse_target(arg.ok_or(CommandError::MissingArgument("mode"))?)?),
        "fast" => {
            let enabled = match arg.ok_or(CommandError::MissingArgument("on|off"))? {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                other => return Err(CommandError::InvalidValue(other.to_owned())),
            };
            ControlMsg::Command(AppCommand::SetFastRemind(enabled))
        }
        "status" => ControlMsg::Status,
        "quit" | "exit" => ControlMsg::Quit,
        _ => return Err(CommandError::UnknownVerb(verb.to_owned())),
    };
    Ok(msg)
}

fn parse_unit(arg: Option<&str>) -> core::result::Result<UnitId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument("unit id"))?;
    arg.parse()
        .map_err(|_| CommandError::InvalidValue(arg.to_owned()))
}

fn parse_target(arg: &str) -> core::result::Result<AppCommand, CommandError> {
    let target = match arg.to_ascii_lowercase().as_str() {
        "stay" => TargetState::StayArm,
        "away" => TargetState::AwayArm,
        "night" => TargetState::NightArm,
        "disarm" | "off" => TargetState::Disarm,
        _ => {
            return arg
                .parse::<u8>()
                .map(AppCommand::SetTargetStateRaw)
                .map_err(|_| CommandError::InvalidValue(arg.to_owned()));
        }
    };
    Ok(AppCommand::SetTargetState(target))
}

/// Forward every parsed line of `input` into `channel`.
///
/// A full channel blocks the caller until the control loop makes room,
/// so no contact edge is ever dropped.  Stops after `quit`; end of input
/// queues `Quit` as well.  Returns the number of messages forwarded.
pub fn forward_lines<const N: usize>(
    input: impl BufRead,
    channel: &Channel<CriticalSectionRawMutex, ControlMsg, N>,
) -> usize {
    let mut forwarded = 0;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("console: read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Ok(msg) => {
                block_on(channel.send(msg));
                forwarded += 1;
                if msg == ControlMsg::Quit {
                    return forwarded;
                }
            }
            Err(e) => warn!("console: {}", Error::from(e)),
        }
    }
    info!("console: input closed");
    block_on(channel.send(ControlMsg::Quit));
    forwarded + 1
}

/// Spawn the stdin reader thread feeding [`CONTROL_CHANNEL`].
pub fn spawn_reader() -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("console".into())
        .spawn(|| {
            let forwarded = forward_lines(io::stdin().lock(), &CONTROL_CHANNEL);
            debug!("console: forwarded {forwarded} message(s)");
        })
}
