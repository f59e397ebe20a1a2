//! Configuration type definitions and defaults

use serde::Deserialize;

use crate::dom::ParseMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Skip whitespace normalization unless the command line says otherwise
    #[serde(default)]
    pub keep_whitespace: bool,
}

/// Parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseConfig {
    /// "auto", "document" or "fragment"
    #[serde(default)]
    pub mode: ParseMode,
}
