//! Application configuration management.
//!
//! The configuration remembers the last league and username so a bare
//! invocation reopens the same league, and may pin the cache directory.
//!
//! Configuration is stored at `~/.config/sleeper-cli/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "sleeper-cli";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Cache directory used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_CACHE_DIR: &str = "cache";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub cache_dir: Option<PathBuf>,
    pub last_username: Option<String>,
    pub last_league_id: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Effective cache directory: explicit override, then the configured
    /// directory, then `./cache`.
    pub fn cache_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.cache_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR))
    }

    /// Remember the league that was just opened.
    pub fn remember_league(&mut self, league_id: &str, username: Option<&str>) {
        self.last_league_id = Some(league_id.to_string());
        if let Some(username) = username {
            self.last_username = Some(username.to_string());
        }
    }
}
