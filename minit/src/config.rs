//! Configuration module for the minit CLI.
//!
//! Settings come from a `minit.toml` file. Every field has a default, so a
//! partial file (or none at all) is valid.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::config_dir;
use minic_util::ColorConfig;
use serde::Deserialize;

use crate::error::{MinitError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "minit.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// How token listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Kind("text")` line per token.
    #[default]
    Text,
    /// A JSON array of tokens.
    Json,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Append `@ line:col` to text listings.
    #[serde(default)]
    pub spans: bool,

    /// When to color diagnostics.
    #[serde(default)]
    pub color: ColorConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Stop at the first unrecognized character instead of reporting all.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches for configuration in the following order:
    /// 1. `minit.toml` in the current directory
    /// 2. `minit/minit.toml` in the system configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns [`MinitError::Config`] if the file does not exist or is not
    /// valid TOML for this structure.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MinitError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MinitError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("minit").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_system_config)
    }
}
