//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

const DEFAULT_STORAGE_KEY: &str = "workouts";
const DEFAULT_DATA_FILE: &str = "data/workouts.json";
const DEFAULT_MAP_ZOOM: u8 = 16;
const MAX_MAP_ZOOM: u8 = 20;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Key the workout list is stored under
    pub storage_key: String,
    /// Backing file for `FileBackend`
    pub data_file: PathBuf,
    /// Zoom used when centering the map on a position or workout
    pub map_zoom: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_key = env::var("WORKOUTS_STORAGE_KEY")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                name: "WORKOUTS_STORAGE_KEY",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            storage_key,
            data_file: env::var("WORKOUTS_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
            map_zoom: match env::var("MAP_ZOOM") {
                Ok(raw) => parse_zoom(&raw)?,
                Err(_) => DEFAULT_MAP_ZOOM,
            },
        })
    }
}

fn parse_zoom(raw: &str) -> Result<u8, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "MAP_ZOOM",
        reason,
    };
    let zoom: u8 = raw
        .trim()
        .parse()
        .map_err(|e| invalid(format!("{:?} is not a zoom level: {}", raw, e)))?;
    if zoom > MAX_MAP_ZOOM {
        return Err(invalid(format!("{} exceeds {}", zoom, MAX_MAP_ZOOM)));
    }
    Ok(zoom)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
