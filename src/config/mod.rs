//! Configuration management
//!
//! An optional TOML file supplies defaults for command-line options:
//!
//! ```toml
//! [output]
//! keep_whitespace = false
//!
//! [parse]
//! mode = "auto"   # "auto" | "document" | "fragment"
//! ```

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path, if one can be determined
    pub fn config_path() -> Option<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        io::parse(contents)
    }
}
