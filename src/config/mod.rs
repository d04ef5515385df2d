// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted notification defaults, loading and saving
//! them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use iced_toasts::ui::notifications::Placement;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.placement = Some(Placement::BottomLeft);
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
//! assert_eq!(loaded_config.placement, Some(Placement::BottomLeft));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::notification::{DismissDuration, MaxStack};
use crate::error::Result;
use crate::ui::notifications::{NotificationDefaults, Placement};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Notification defaults as stored on disk.
///
/// Every field is optional so hand-edited files only need the values they
/// override. Durations are signed so a negative value in the file is clamped
/// instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duration_ms: Option<i64>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub max_stack: Option<usize>,
    #[serde(default)]
    pub pause_on_hover: Option<bool>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Config {
    /// Resolves the stored values into manager defaults, clamping anything
    /// out of range.
    #[must_use]
    pub fn notification_defaults(&self) -> NotificationDefaults {
        NotificationDefaults {
            duration: self
                .duration_ms
                .map_or_else(DismissDuration::default, DismissDuration::from_millis),
            animate: self.animate.unwrap_or(DEFAULT_ANIMATE),
            placement: self.placement.unwrap_or_default(),
            max_stack: self.max_stack.map_or_else(MaxStack::default, MaxStack::new),
            pause_on_hover: self.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER),
        }
    }

    /// Capacity of the diagnostics buffer, clamped to the supported range.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file exists but
/// cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
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

/// Loads the configuration from `path`.
///
/// Unparsable content falls back to the default configuration.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
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
