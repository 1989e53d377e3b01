//! Configuration file support for podcast-player.
//!
//! This module provides functionality for loading and saving user preferences
//! from a TOML configuration file.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User configuration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Episode catalog loaded at startup (JSON array of episodes)
    #[serde(default)]
    pub catalog: Option<String>,

    /// Start with shuffle enabled
    #[serde(default)]
    pub start_shuffled: bool,

    /// Start with looping enabled
    #[serde(default)]
    pub start_looping: bool,

    /// Fixed shuffle seed, for reproducible sessions
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the path to the config file.
    ///
    /// Returns ~/.config/podcast-player/config.toml on Linux,
    /// or a platform-appropriate location on other systems.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?
            .join("podcast-player");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the catalog path, preferring an explicit override.
    pub fn catalog_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.as_ref().map(PathBuf::from))
            .ok_or_else(|| AppError::Config("no episode catalog configured".to_string()))
    }
}
