// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! tour preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_spotlight::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.duration_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.duration_ms, Some(8_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::{FocusPoint, ProgressDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSpotlight";

/// A focus point as written in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPointEntry {
    pub x: f32,
    pub y: f32,
}

impl From<FocusPointEntry> for FocusPoint {
    fn from(entry: FocusPointEntry) -> Self {
        FocusPoint::new(entry.x, entry.y)
    }
}

impl From<FocusPoint> for FocusPointEntry {
    fn from(point: FocusPoint) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub auto_start: Option<bool>,
    #[serde(default)]
    pub focus_points: Option<Vec<FocusPointEntry>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_PROGRESS_DURATION_MS),
            auto_start: Some(DEFAULT_AUTO_START),
            focus_points: None,
        }
    }
}

impl Config {
    /// Progress duration, raised to one tick if shorter.
    #[must_use]
    pub fn duration(&self) -> ProgressDuration {
        self.duration_ms
            .map_or_else(ProgressDuration::default, ProgressDuration::from_millis)
    }

    #[must_use]
    pub fn auto_start(&self) -> bool {
        self.auto_start.unwrap_or(DEFAULT_AUTO_START)
    }

    /// Configured focus points, or the default tour when none (or an empty
    /// list) are configured.
    #[must_use]
    pub fn focus_points(&self) -> Vec<FocusPoint> {
        match &self.focus_points {
            Some(entries) if !entries.is_empty() => {
                entries.iter().copied().map(FocusPoint::from).collect()
            }
            _ => default_focus_points(),
        }
    }
}

/// Center first, then the four rule-of-thirds intersections.
#[must_use]
pub fn default_focus_points() -> Vec<FocusPoint> {
    vec![
        FocusPoint::CENTER,
        FocusPoint::new(33.3, 33.3),
        FocusPoint::new(66.7, 33.3),
        FocusPoint::new(66.7, 66.7),
        FocusPoint::new(33.3, 66.7),
    ]
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the user config directory.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the user config directory.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`. Invalid TOML yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Ignoring invalid settings: {err}");
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
