use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/landing/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("landing").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()` anchored at
    ///   the file's directory.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config {
                base_dir,
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.base_dir = base_dir;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The carousel has at least one slide
    /// - The operations panel has at least one tab
    /// - Observer threshold lies in [0, 1]
    /// - Tick rate and smooth-scroll divisor are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.slides.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one slide must be configured".to_string(),
            });
        }

        if self.content.tabs.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one tab must be configured".to_string(),
            });
        }

        let threshold = self.observer.reveal_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationError {
                message: format!("reveal_threshold must be within 0.0..=1.0, got {}", threshold),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.smooth_divisor == 0 {
            return Err(ConfigError::ValidationError {
                message: "smooth_divisor must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Resolves a content asset path against the config directory.
    pub fn asset_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
