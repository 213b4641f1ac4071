//! Config file loading.

use std::path::Path;

use anyhow::{Context, Result};
use fittrack_core::TrackerConfig;
use tracing::{debug, info};

/// Load config from `path`, or defaults when no path was given.
pub fn load(path: Option<&Path>) -> Result<TrackerConfig> {
    let Some(path) = path else {
        debug!("No config file given, using defaults");
        return Ok(TrackerConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = TrackerConfig::from_json(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults_without_path() {
        assert_eq!(load(None).unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "daily_water_target": 10, "week_starts_on": "Sun" }}"#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.daily_water_target, 10);
        assert_eq!(config.week_starts_on, chrono::Weekday::Sun);
    }

    #[test]
    fn test_load_reports_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "weight_window_days": 1 }}"#).unwrap();

        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("weight_window_days"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(dir.path().join("absent.json").as_path())).is_err());
    }
}
