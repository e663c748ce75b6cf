//! core::config
//!
//! Project configuration loading.
//!
//! # Overview
//!
//! A project may carry a `news.toml` at its root naming the NEWS file to
//! maintain. Configuration is optional; without it the tool falls back to a
//! file named `NEWS`.
//!
//! # Precedence
//!
//! The NEWS file path is resolved in this order (later overrides earlier):
//! 1. Default (`NEWS`)
//! 2. `news_file` in `news.toml`
//! 3. The `--file` CLI flag (not handled here)
//!
//! # Example
//!
//! ```toml
//! news_file = "doc/NEWS.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "news.toml";

/// Default NEWS file path when no configuration names one.
pub const DEFAULT_NEWS_FILE: &str = "NEWS";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Project configuration (`news.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the NEWS file, relative to the project root.
    pub news_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the project rooted at `root`.
    ///
    /// A missing `news.toml` yields the default configuration; a present but
    /// unreadable or unparsable one is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(news_file) = &self.news_file {
            if news_file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "news_file cannot be empty".into(),
                ));
            }
            if news_file.is_absolute() {
                return Err(ConfigError::InvalidValue(
                    "news_file must be relative to the project root".into(),
                ));
            }
        }
        Ok(())
    }

    /// The configured NEWS file path, or the default.
    pub fn news_file(&self) -> &Path {
        self.news_file
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_NEWS_FILE))
    }
}
