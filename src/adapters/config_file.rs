//! JSON configuration file adapter.
//!
//! Implements [`ConfigPort`] by reading the host plugin's JSON
//! configuration from a path.  Read once at startup.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

/// Configuration stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse a configuration document.
pub fn parse_config(text: &str) -> Result<SystemConfig, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::Corrupted(e.to_string()))
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            kind => {
                warn!(
                    "JsonConfigFile: reading {} failed ({kind:?}): {e}",
                    self.path.display()
                );
                ConfigError::IoError
            }
        })?;
        let cfg = parse_config(&text)?;
        info!(
            "JsonConfigFile: loaded {} ({} window(s)/door(s))",
            self.path.display(),
            cfg.windows_and_doors.len()
        );
        Ok(cfg)
    }
}
