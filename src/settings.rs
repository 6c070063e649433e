//! Simulation settings
//!
//! Read from a JSON file; any field left out takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_ARENA_SIZE, DEFAULT_ARENA_WIDTH, SIM_DT};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run configuration for a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for reproducible worlds
    pub seed: u64,
    /// Number of random blobs created up front
    pub blob_count: usize,

    // === Arena ===
    /// Width used for random placement
    pub arena_width: f64,
    /// Edge length used for wall contact
    pub arena_size: f64,

    // === Run ===
    /// Timestep per tick
    pub dt: f64,
    /// Ticks to run before reporting
    pub ticks: u64,
    /// Scale applied to every random starting velocity
    pub speed_scale: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 1,
            blob_count: 10,

            arena_width: DEFAULT_ARENA_WIDTH,
            arena_size: DEFAULT_ARENA_SIZE,

            dt: SIM_DT,
            ticks: 600,
            speed_scale: 60.0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "arena_size": 250.0 }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.arena_size, 250.0);
        assert_eq!(settings.arena_width, DEFAULT_ARENA_WIDTH);
        assert_eq!(settings.blob_count, Settings::default().blob_count);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 3,
            ticks: 10,
            ..Default::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{ seed: "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/blob-arena.json"));
        assert_eq!(settings, Settings::default());
    }
}
