//! Configuration loading.
//!
//! Settings live in a single TOML file. A missing file is not an error: the
//! guard runs with the built-in messages and checks every name field.

pub mod model;

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, MessagesConfig, RegistrationConfig};

/// Default location: `<config dir>/nameguard/config.toml`.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nameguard")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Load configuration from `path`, falling back to defaults when it doesn't exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read config from {}", path.display()))
        }
    };
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Write `config` as pretty TOML, creating parent directories as needed.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}
