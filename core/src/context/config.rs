//! Application configuration
//!
//! Stored with confy as `~/.config/fractal-timer/config.toml` (or the
//! platform equivalent). Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::ConfigError;
use crate::link::DEFAULT_LINK_NAME;
use crate::storage::{data_dir, default_state_path};

pub const APP_NAME: &str = "fractal-timer";
pub const CONFIG_NAME: &str = "config";

/// Poll interval of the reference overlay
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

fn default_state_file() -> PathBuf {
    default_state_path()
}

fn default_chart_file() -> PathBuf {
    data_dir().join("progress.png")
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_link_name() -> String {
    DEFAULT_LINK_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Marathon state document
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
    /// Progress chart output
    #[serde(default = "default_chart_file")]
    pub chart_file: PathBuf,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Shared memory region published by the game
    #[serde(default = "default_link_name")]
    pub link_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            chart_file: default_chart_file(),
            poll_interval_ms: default_poll_interval_ms(),
            link_name: default_link_name(),
        }
    }
}

impl AppConfig {
    /// Load the stored config, falling back to defaults if it is unreadable.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load configuration, using defaults");
            Self::default()
        })
    }

    pub fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    /// Poll interval, never shorter than 1ms
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
