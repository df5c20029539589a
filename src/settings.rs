//! Startup settings
//!
//! Read once at startup from a JSON file (native) or derived from the canvas
//! (web). Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};
use crate::sim::Viewport;

/// Environment variable naming a settings file for the native binary
pub const SETTINGS_ENV_VAR: &str = "LANE_DODGE_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("viewport width {width} is below the minimum of {min}")]
    ViewportTooNarrow { width: f32, min: f32 },
    #[error("viewport height {height} is below the minimum of {min}")]
    ViewportTooShort { height: f32, min: f32 },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed viewport in pixels
    pub viewport: Viewport,
    /// RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Let the demo autopilot steer
    pub autopilot: bool,
    /// Frames the native headless run plays at most
    pub demo_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            seed: None,
            autopilot: false,
            demo_frames: 60 * 60,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `LANE_DODGE_SETTINGS`, or defaults
    ///
    /// Errors are logged and replaced by defaults.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings from {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Check that the viewport fits the player lane and the spawn range
    pub fn validate(&self) -> Result<(), SettingsError> {
        let Viewport { width, height } = self.viewport;
        if width.is_nan() || width < MIN_VIEWPORT_WIDTH {
            return Err(SettingsError::ViewportTooNarrow {
                width,
                min: MIN_VIEWPORT_WIDTH,
            });
        }
        if height.is_nan() || height < MIN_VIEWPORT_HEIGHT {
            return Err(SettingsError::ViewportTooShort {
                height,
                min: MIN_VIEWPORT_HEIGHT,
            });
        }
        Ok(())
    }

    /// Seed to use for this session
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
