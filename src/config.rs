use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::shows::lookup::{DEFAULT_RECENT_DAYS_AHEAD, DEFAULT_RECENT_DAYS_BACK};

/// Application configuration loaded from TOML config file.
/// All fields have sensible defaults — the config file is optional.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Custom archive database path (overrides XDG default).
    pub db_path: Option<PathBuf>,
    /// Recent-window reach into the past, in days.
    pub recent_days_back: i64,
    /// Recent-window reach into the future, in days.
    pub recent_days_ahead: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            recent_days_back: DEFAULT_RECENT_DAYS_BACK,
            recent_days_ahead: DEFAULT_RECENT_DAYS_AHEAD,
        }
    }
}

impl AppConfig {
    /// Load config from `~/.config/aircheck/config.toml`.
    /// Returns default config if the file doesn't exist.
    /// Logs a warning if the file exists but can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match config_path {
            Some(path) if path.exists() => match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Resolve the default archive database path using the XDG data directory.
pub fn default_db_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", crate::APP_NAME) {
        dirs.data_dir().join("aircheck.db")
    } else {
        // Fallback: current directory
        PathBuf::from("aircheck.db")
    }
}
