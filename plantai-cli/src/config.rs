//! Base-URL resolution. The backend host is deployment configuration, never
//! a per-call-site constant.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CliError;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_ENV: &str = "PLANTAI_API_URL";

/// On-disk configuration file (`~/.config/plantai/config.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    pub api_url: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("Invalid config file {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Default config file location, if a config directory exists on this system
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plantai").join("config.toml"))
}

/// Resolve the backend base URL.
///
/// Order: explicit flag, `PLANTAI_API_URL`, config file, built-in default.
pub fn resolve_api_url(
    flag: Option<&str>,
    config_path: Option<&Path>,
) -> Result<String, CliError> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            debug!("Using backend URL from {}", API_URL_ENV);
            return Ok(url);
        }
    }

    let config = match config_path {
        Some(path) => Some(CliConfig::load_from_path(path)?),
        None => match default_config_path() {
            Some(path) if path.exists() => Some(CliConfig::load_from_path(&path)?),
            _ => None,
        },
    };

    if let Some(url) = config.and_then(|c| c.api_url) {
        return Ok(url);
    }

    Ok(DEFAULT_API_URL.to_string())
}
