// SPDX-License-Identifier: MPL-2.0
//! Input tuning configuration.
//!
//! Thresholds controlling how the gallery feels: how far a wheel must travel
//! before the thumbnail window scrolls, how long the debounce window is, and
//! how far a swipe must go to count. Hosts that want tunable input can load
//! these from a TOML file; everything has a sensible default.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_modal::config::{self, Config};
//!
//! let config = config::load_from_path("gallery.toml".as_ref()).unwrap_or_default();
//! assert!(config.wheel_threshold_px > 0.0);
//! ```

use crate::domain::newtypes::WindowSize;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Accumulated wheel distance (px) required to scroll the window one step.
pub const DEFAULT_WHEEL_THRESHOLD_PX: f32 = 100.0;
/// Quiet time (ms) after the last wheel event before the accumulator settles.
pub const DEFAULT_WHEEL_DEBOUNCE_MS: u64 = 150;
/// Touch travel (px) required for a swipe to fire.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thumbnail slots visible at once. Values below 1 are raised to 1.
    pub window_size: usize,
    pub wheel_threshold_px: f32,
    pub wheel_debounce_ms: u64,
    pub swipe_threshold_px: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: WindowSize::default().value(),
            wheel_threshold_px: DEFAULT_WHEEL_THRESHOLD_PX,
            wheel_debounce_ms: DEFAULT_WHEEL_DEBOUNCE_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl Config {
    /// The configured window size as a validated value object.
    #[must_use]
    pub fn window_size(&self) -> WindowSize {
        WindowSize::new(self.window_size)
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_matches_documented_constants() {
        let config = Config::default();
        assert_eq!(config.window_size, 3);
        assert!((config.wheel_threshold_px - DEFAULT_WHEEL_THRESHOLD_PX).abs() < f32::EPSILON);
        assert_eq!(config.wheel_debounce_ms, DEFAULT_WHEEL_DEBOUNCE_MS);
        assert!((config.swipe_threshold_px - DEFAULT_SWIPE_THRESHOLD_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn window_size_accessor_validates() {
        let config = Config {
            window_size: 0,
            ..Config::default()
        };
        assert_eq!(config.window_size().value(), 1);
    }

    #[test]
    fn round_trip_through_toml_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("gallery.toml");

        let config = Config {
            window_size: 4,
            wheel_threshold_px: 80.0,
            wheel_debounce_ms: 200,
            swipe_threshold_px: 24.0,
        };
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let loaded: Config = toml::from_str("window_size = 5").expect("parse partial config");
        assert_eq!(loaded.window_size, 5);
        assert_eq!(loaded.wheel_debounce_ms, DEFAULT_WHEEL_DEBOUNCE_MS);
    }

    #[test]
    fn load_from_missing_path_reports_io_error() {
        let dir = tempdir().expect("create temp dir");
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
