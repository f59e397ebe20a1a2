//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "HTML_SKELETON_CONFIG";

/// Get the config file path ($HTML_SKELETON_CONFIG, else
/// ~/.config/html-skeleton/config.toml)
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".config").join("html-skeleton").join("config.toml"))
}

/// Load configuration from the default location, or return defaults if
/// there is no file
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific file, or return defaults if it does
/// not exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse configuration from TOML text
pub fn parse(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}
