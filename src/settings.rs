//! Host settings
//!
//! Gameplay constants are compile-time (`crate::consts`). These are the knobs
//! of the host around the simulation, read from an optional JSON file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DELTA;

/// Smallest accepted frame delta cap; below this the game barely moves
const MIN_FRAME_DELTA_CAP: f32 = 0.001;
/// Largest accepted frame delta cap
const MAX_FRAME_DELTA_CAP: f32 = 0.25;

/// Failure to read or parse a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SettingsError::Parse { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Obstacle seed; random when absent
    pub seed: Option<u64>,
    /// Largest wall-clock step fed to the simulation (seconds)
    pub max_frame_delta: f32,

    // === Headless host ===
    /// Let the autopilot play
    pub autopilot: bool,
    /// How long the headless run lasts (seconds)
    pub run_seconds: f32,
    /// Headless clock rate (frames per second)
    pub frame_rate: f32,

    // === Assets ===
    /// Directory holding the texture images
    pub asset_dir: PathBuf,
    /// Hand out texture handles without checking the files exist
    pub virtual_assets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_frame_delta: MAX_FRAME_DELTA,

            autopilot: true,
            run_seconds: 30.0,
            frame_rate: 60.0,

            asset_dir: PathBuf::from("assets"),
            virtual_assets: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Frame delta cap clamped to a sane range
    pub fn effective_max_frame_delta(&self) -> f32 {
        if !self.max_frame_delta.is_finite() {
            log::warn!("max_frame_delta is not finite, using {}", MAX_FRAME_DELTA);
            return MAX_FRAME_DELTA;
        }
        self.max_frame_delta
            .clamp(MIN_FRAME_DELTA_CAP, MAX_FRAME_DELTA_CAP)
    }
}
