//! Configuration management for gameshelf
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_API_BASE_URL, TICK_RATE_DEFAULT_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address of the games API, without a trailing path
    pub base_url: String,
    /// Request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// When a deleted game leaves the local list
    pub delete_policy: DeletePolicy,
    /// Event loop tick interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log view
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

/// How the local games list reacts to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Remove once the request completes without a transport error, whatever the status.
    #[default]
    OnResolve,
    /// Remove only after the server answers with a success status.
    Confirmed,
    /// Remove immediately and restore the entry if the request fails.
    Optimistic,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            delete_policy: DeletePolicy::default(),
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        let current_dir_config = PathBuf::from("gameshelf.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gameshelf").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", base_url.scheme());
        }

        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {} milliseconds, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# gameshelf Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("gameshelf"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
