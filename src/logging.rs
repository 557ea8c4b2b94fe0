//! Tracing setup.
//!
//! The terminal is owned by the UI, so log records go to a file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log file: `~/.cache/landing/landing.log` or platform equivalent.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("landing").join("landing.log")
}

/// Picks the log file: explicit override, then config, then the default.
pub fn resolve_log_path(config: &LoggingConfig, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(default_log_path)
}

/// Installs the global subscriber and returns the file it writes to.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig, override_path: Option<&Path>) -> io::Result<PathBuf> {
    let path = resolve_log_path(config, override_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init();

    if installed.is_err() {
        // A subscriber is already set (tests, embedding); keep it.
        tracing::debug!("Global tracing subscriber already installed");
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_config_file() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/from-config.log")),
        };
        let path = resolve_log_path(&config, Some(Path::new("/tmp/override.log")));
        assert_eq!(path, PathBuf::from("/tmp/override.log"));
    }

    #[test]
    fn config_file_beats_default() {
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("/tmp/from-config.log")),
        };
        assert_eq!(
            resolve_log_path(&config, None),
            PathBuf::from("/tmp/from-config.log")
        );
    }

    #[test]
    fn default_path_ends_with_crate_log() {
        assert!(default_log_path().ends_with("landing/landing.log"));
    }
}
