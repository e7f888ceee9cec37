//! Builder configuration file handling
//!
//! Settings are stored as JSON. Every field is optional in the file and
//! falls back to its default, so an empty object `{}` is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{BuilderError, Result};
use crate::generator::{DEFAULT_SEPARATOR, GeneratorConfig};
use crate::types::JoinMode;

/// Smallest accepted event poll interval
pub const MIN_TICK_RATE_MS: u64 = 10;
/// Largest accepted event poll interval
pub const MAX_TICK_RATE_MS: u64 = 1000;

/// Application settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Paragraph joining policy
    pub mode: JoinMode,
    /// Separator between checked items of a multi-choice category
    pub separator: String,
    /// Event poll interval of the interactive wizard
    pub tick_rate_ms: u64,
    /// Show "Step k of 8" progress in the header
    pub show_step_numbers: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            mode: JoinMode::Normalized,
            separator: DEFAULT_SEPARATOR.to_string(),
            tick_rate_ms: 250,
            show_step_numbers: true,
        }
    }
}

impl BuilderConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        fs::write(&path, json).map_err(|e| {
            BuilderError::config(format!(
                "Failed to write configuration to {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            BuilderError::config(format!(
                "Failed to read configuration from {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            BuilderError::config(format!(
                "Failed to parse configuration {:?}: {}",
                path.as_ref(),
                e
            ))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.generator().validate()?;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(BuilderError::config(format!(
                "Tick rate must be between {} and {} ms (got {})",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }
        Ok(())
    }

    /// Generator settings derived from this configuration
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            mode: self.mode,
            separator: self.separator.clone(),
        }
    }

    /// Event poll interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
