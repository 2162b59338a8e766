use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com API key. Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't
    /// exist yet. A non-empty `WEATHER_API_KEY` environment variable
    /// overrides whatever the file says.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env_override(env::var(API_KEY_ENV).ok());

        Ok(cfg)
    }

    /// Apply the environment override: a non-blank value replaces whatever
    /// the file provided, anything else leaves it alone.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
