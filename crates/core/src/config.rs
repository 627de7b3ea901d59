//! Configuration management for the pattern catalogue.
//!
//! Every field has a default, so a configuration file only needs to name
//! the values it wants to change:
//!
//! ```toml
//! [airstrip]
//! runways = ["09L", "27R"]
//! flights = ["AC101", "AC102", "AC103"]
//! landing_duration_ms = 250
//! mode = "sequential"
//!
//! [logging]
//! level = "debug"
//! ```

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "config-file")]
use std::path::Path;

/// Default simulated landing time for a runway
pub const DEFAULT_LANDING_DURATION_MS: u64 = 1000;

/// Default coordinator mailbox depth
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub airstrip: AirstripConfig,
    pub logging: LoggingConfig,
}

/// How an episode issues its landing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeMode {
    /// Every flight requests at once
    #[default]
    Concurrent,
    /// Each flight requests only after the previous one has resolved
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirstripConfig {
    /// Runway designators, in scan order
    pub runways: Vec<String>,
    /// Flight callsigns, in request order
    pub flights: Vec<String>,
    /// Time a runway stays occupied per landing
    pub landing_duration_ms: u64,
    /// Bounded mailbox size of the coordinator task
    pub mailbox_capacity: usize,
    pub mode: EpisodeMode,
}

impl Default for AirstripConfig {
    fn default() -> Self {
        Self {
            runways: vec!["09L".to_string()],
            flights: vec![
                "AC101".to_string(),
                "AC102".to_string(),
                "AC103".to_string(),
            ],
            landing_duration_ms: DEFAULT_LANDING_DURATION_MS,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            mode: EpisodeMode::Concurrent,
        }
    }
}

impl AirstripConfig {
    /// Landing duration as a `Duration`
    pub fn landing_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.landing_duration_ms)
    }

    /// Check the section for values the coordinator cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.runways.is_empty() {
            return Err(CoreError::InvalidConfig(
                "airstrip.runways must name at least one runway".to_string(),
            ));
        }
        if self.landing_duration_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "airstrip.landing_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.mailbox_capacity == 0 {
            return Err(CoreError::InvalidConfig(
                "airstrip.mailbox_capacity must be greater than zero".to_string(),
            ));
        }
        if let Some(dup) = first_duplicate(&self.runways) {
            return Err(CoreError::InvalidConfig(format!(
                "duplicate runway designator: {}",
                dup
            )));
        }
        if let Some(dup) = first_duplicate(&self.flights) {
            return Err(CoreError::InvalidConfig(format!(
                "duplicate flight callsign: {}",
                dup
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    #[cfg(feature = "config-file")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(CoreError::from)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        self.airstrip.validate()
    }
}

fn first_duplicate(values: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    values
        .iter()
        .find(|value| !seen.insert(value.as_str()))
        .map(String::as_str)
}
