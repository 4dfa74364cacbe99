//! Optional JSON configuration for the native window.
//!
//! Looked up as `server_debugger.json` in the working directory. Every
//! field is optional; a missing file yields the built-in defaults and a
//! malformed one is logged and ignored. Dashboard values are never stored.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clamp;
use crate::error::ConfigError;
use crate::model::constants::*;

/// Window settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub vsync: bool,
    /// Open the window centered on the primary monitor.
    pub centered: bool,
    pub clear_color: [f32; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            vsync: true,
            centered: true,
            clear_color: CLEAR_COLOR,
        }
    }
}

impl AppConfig {
    /// Parse a config from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Validates and clamps window size and clear color to usable ranges.
    ///
    /// A non-finite size falls back to the default; a non-finite color
    /// channel becomes 0.
    pub fn validate(&mut self) {
        self.window_width = clamp_size(self.window_width, WINDOW_WIDTH, MIN_WINDOW_WIDTH);
        self.window_height = clamp_size(self.window_height, WINDOW_HEIGHT, MIN_WINDOW_HEIGHT);
        for channel in &mut self.clear_color {
            *channel = if channel.is_finite() {
                clamp(*channel, 0.0, 1.0)
            } else {
                0.0
            };
        }
    }

    /// Read a config file. `Ok(None)` when the file does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load config from `path`, returning defaults if not found or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(mut config)) => {
                log::info!("Loaded config from {}", path.display());
                config.validate();
                config
            }
            Ok(None) => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load `server_debugger.json` from the working directory.
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE_NAME))
    }
}

fn clamp_size(value: f32, default: f32, min: f32) -> f32 {
    if value.is_finite() {
        clamp(value, min, MAX_WINDOW_SIZE)
    } else {
        default
    }
}
