//! Host settings and preferences
//!
//! Gameplay tuning is fixed (see `consts`); these only shape how the host
//! runs the simulation. Stored as JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FPS;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Host preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the loop is paced to
    pub fps: u32,
    /// Run seed for obstacle placement; random when unset
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Headless host ===
    /// Let the built-in pilot fly the bird
    pub autopilot: bool,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
    /// Frames the game over banner stays up before the host quits
    pub linger_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            autopilot: true,
            max_frames: Some(60 * 60),
            linger_frames: 90,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_VAR: &'static str = "FLAPPY_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `FLAPPY_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::PATH_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.muted);
        assert_eq!(settings.fps, FPS);
        assert!(settings.autopilot);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            max_frames: None,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ fps: }"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            Settings::from_file("/definitely/not/here.json"),
            Err(SettingsError::Io(_))
        ));
    }
}
