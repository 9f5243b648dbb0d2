//! Client configuration loaded from TOML.
//!
//! ```toml
//! # dirichlet.toml
//! series_terms = 4096
//! log_level = "debug"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use dirichlet::DEFAULT_SERIES_TERMS;
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dirichlet.toml";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A key has a value outside its allowed range.
    #[error("invalid configuration value: {0}")]
    Invalid(String),
}

/// Settings for the `dirichlet` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Number of terms summed by `lseries` when `--terms` is absent. Must be
    /// at least 1, the same bound `--terms` enforces.
    pub series_terms: u64,
    /// Default tracing filter, overridden by `RUST_LOG` and `--verbose`.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            series_terms: DEFAULT_SERIES_TERMS,
            log_level: "warn".into(),
        }
    }
}

impl ClientConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and the defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the file cannot be read, does not parse, or holds
    /// an out-of-range value.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for `series_terms = 0`.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        if config.series_terms == 0 {
            return Err(ConfigError::Invalid(
                "series_terms must be at least 1".into(),
            ));
        }
        Ok(config)
    }
}
