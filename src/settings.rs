//! Session settings
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Settings loading/validation failures
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(&'static str),
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Rerolls allowed this session
    pub max_rerolls: u32,
    /// Day highlighted as "today" (an external input, not derived from a clock)
    pub current_day: u32,
    /// RNG seed for reproducible rerolls (random when absent)
    pub seed: Option<u64>,

    // === Wallet ===
    pub starting_coins: u64,
    pub starting_gems: u64,

    // === Accessibility ===
    /// Skip card and counter animations
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_rerolls: DEFAULT_MAX_REROLLS,
            current_day: DEFAULT_CURRENT_DAY,
            seed: None,

            starting_coins: DEFAULT_STARTING_COINS,
            starting_gems: DEFAULT_STARTING_GEMS,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_rerolls == 0 {
            return Err(SettingsError::Invalid("max_rerolls must be at least 1"));
        }
        if self.current_day == 0 {
            return Err(SettingsError::Invalid("current_day is 1-based"));
        }
        Ok(())
    }

    /// Same settings with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
