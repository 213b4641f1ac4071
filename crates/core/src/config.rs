//! Tracker configuration.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value outside its allowed range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session-wide tracking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Water glasses per day; daily water intake is capped here
    pub daily_water_target: u32,

    /// First day of the calendar week
    pub week_starts_on: Weekday,

    /// Number of most recent records used for weight trends
    pub weight_window_days: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            daily_water_target: 8,
            week_starts_on: Weekday::Mon,
            weight_window_days: 7,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.daily_water_target == 0 {
            return Err(ConfigError::Invalid(
                "daily_water_target must be positive".to_string(),
            ));
        }
        if self.weight_window_days < 2 {
            return Err(ConfigError::Invalid(
                "weight_window_days must cover at least two days".to_string(),
            ));
        }
        Ok(())
    }
}
