//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. A missing file means
//! defaults; a present-but-invalid file is an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// Session durations, passed into the runner at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break session length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` if the file cannot be read, does not
    /// parse, or specifies a zero duration.
    pub fn load(path: &Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path)
            .map_err(|e| PomoError::Config(format!("Failed to read config file: {e}")))?;

        let config: Self = serde_yaml::from_str(&yaml)
            .map_err(|e| PomoError::Config(format!("Failed to parse config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject non-positive durations.
    fn validate(&self) -> Result<(), PomoError> {
        if self.work_minutes == 0 || self.break_minutes == 0 {
            return Err(PomoError::Config(
                "Session durations must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_work_minutes() -> u32 {
    25
}

fn default_break_minutes() -> u32 {
    5
}
