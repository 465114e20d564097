//! Configuration management for the DeepVision client.
//!
//! Handles loading and saving the TOML configuration file from the platform
//! config directory, with per-field defaults and atomic writes.

use crate::{
    config::{BackendConfig, LeagueConfig, BACKEND_ENV_VAR},
    AppError, AppResult,
};

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// League tab defaults.
    #[serde(default)]
    pub league: LeagueConfig,
}

impl Config {
    /// Load configuration from the platform config directory, writing the
    /// defaults if no file exists yet. `DEEPVISION_BACKEND` overrides the
    /// backend URL without touching the file.
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;

        if let Ok(base_url) = std::env::var(BACKEND_ENV_VAR) {
            if !base_url.trim().is_empty() {
                info!(base_url = %base_url, "Backend URL overridden from environment");
                config.backend.base_url = base_url.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Load configuration from an explicit path, creating it with defaults
    /// when missing.
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Store a new league selection in the platform config file. The file
    /// is re-read first so environment overrides never end up on disk.
    pub fn save_league(league: &LeagueConfig) -> AppResult<()> {
        let config_path = Self::config_path()?;
        let mut stored = Self::load_from(&config_path)?;
        stored.league = league.clone();
        stored.save_to(&config_path)
    }

    /// Save configuration using a write-to-temp-then-rename.
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!(config_dir = ?parent, "Created config directory");
            }
        }

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
        })?;

        info!(config_path = ?config_path, "Configuration saved");

        Ok(())
    }

    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "deepvision", "DeepVision").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
            }
        })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
