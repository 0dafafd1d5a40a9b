//! Configuration for status rendering

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Renderer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MOTD block settings
    pub motd: MotdConfig,
    /// Player roster settings
    pub roster: RosterConfig,
}

/// MOTD block configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotdConfig {
    /// Maximum number of MOTD lines shown
    pub max_lines: usize,
    /// Markup placed between rendered lines
    pub line_separator: String,
    /// Text shown when the server reports no MOTD
    pub fallback: String,
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            max_lines: 2,
            line_separator: "<br>".to_string(),
            fallback: "Магній Ванільний Український сервер".to_string(),
        }
    }
}

/// Player roster configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Prefix of player profile links; the slug and a `/` are appended
    pub profile_base: String,
    /// Prefix of avatar image URLs; the encoded name and size are appended
    pub avatar_base: String,
    /// Avatar size in pixels
    pub avatar_size: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            profile_base: "/players/profile/".to_string(),
            avatar_base: "https://crafthead.net/helm/".to_string(),
            avatar_size: 128,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // ~/.config/motd-render/config.json
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => warn!(path = %config_path.display(), "ignoring config: {}", e),
                }
            }
        }
        Self::default()
    }
}

/// Get the default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("motd-render")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
