use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::ipfs::IpfsConfig;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config format error: {0}")]
    Format(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// ipfsx configuration, stored as TOML
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// IPFS daemon settings
    #[serde(default)]
    pub ipfs: IpfsConfig,
}

impl AppConfig {
    /// Default location of the config file: `<user config dir>/ipfsx/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        path.push("ipfsx");
        path.push("config.toml");
        path
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ConfigError::Format(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Format(format!("failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }
}
