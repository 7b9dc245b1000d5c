//! Arena settings
//!
//! Optional user preferences stored as RON. A missing or broken file falls back
//! to defaults so the arena always starts.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::Result;

/// User-configurable arena settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    /// Colorize menu output with ANSI escapes
    pub color: bool,
    /// Seed the session's dice
    pub random_seed: Option<u64>,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            color: true,
            random_seed: None,
        }
    }
}

impl ArenaSettings {
    /// Default location of the settings file
    pub fn default_path() -> PathBuf {
        PathBuf::from("arena.ron")
    }

    /// Load settings from file, or return default if file doesn't exist
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to load settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ArenaSettings::load(&dir.path().join("nope.ron"));
        assert_eq!(settings, ArenaSettings::default());
        assert!(settings.color);
    }

    #[test]
    fn test_full_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");
        fs::write(&path, "(\n    color: false,\n    random_seed: Some(42),\n)").unwrap();

        let settings = ArenaSettings::load(&path);

        assert_eq!(
            settings,
            ArenaSettings {
                color: false,
                random_seed: Some(42),
            }
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");
        fs::write(&path, "(random_seed: Some(7))").unwrap();

        let settings = ArenaSettings::load(&path);

        assert!(settings.color);
        assert_eq!(settings.random_seed, Some(7));
    }

    #[test]
    fn test_read_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");
        fs::write(&path, "(color: maybe)").unwrap();

        let err = ArenaSettings::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arena.ron");
        fs::write(&path, "this is not ron").unwrap();

        assert_eq!(ArenaSettings::load(&path), ArenaSettings::default());
    }
}
