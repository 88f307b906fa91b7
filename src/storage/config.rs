//! Configuration handling for Lightshow CLI
//!
//! Configuration is read from `lightshow.toml` in the current directory,
//! falling back to `~/.config/lightshow/config.toml` (platform equivalent),
//! and finally to built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SizeLimits;

/// Name of the per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "lightshow.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding show directories
    pub shows_dir: PathBuf,

    /// Directory that receives packaged shows (`<build_dir>/<show>`)
    pub build_dir: PathBuf,

    /// Validation size heuristics
    pub validation: SizeLimits,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shows_dir: PathBuf::from("shows"),
            build_dir: PathBuf::from("build"),
            validation: SizeLimits::default(),
            source: None,
        }
    }
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(&local);
        }

        if let Some(global) = Self::global_config_dir().map(|d| d.join("config.toml")) {
            if global.is_file() {
                return Self::from_file(&global);
            }
        }

        Ok(Self::default())
    }

    /// Loads configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "lightshow", "lightshow")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default output directory for a packaged show
    pub fn package_dir(&self, show_name: &str) -> PathBuf {
        self.build_dir.join(show_name)
    }
}
