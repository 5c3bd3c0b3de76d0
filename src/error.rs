//! Unified error types.
//!
//! The state machines themselves never fail: malformed or redundant
//! input is ignored and logged.  Errors only exist at the outer ring,
//! where configuration is loaded and console lines are parsed.  All
//! variants are cheap to clone so adapters can log and forward them.

use core::fmt;

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation outside the core funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// A control command could not be parsed.
    Command(CommandError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Command(e) => write!(f, "command: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line.
    Empty,
    /// First word is not a known command.
    UnknownVerb(String),
    /// The command needs an argument that was not given.
    MissingArgument(&'static str),
    /// The argument could not be interpreted.
    InvalidValue(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownVerb(v) => write!(f, "unknown command '{v}'"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidValue(v) => write!(f, "invalid value '{v}'"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
