#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for jmxproxybeat
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (`jmxproxybeat.toml` in the config directory)
//! - Environment variables
//!
//! Command line flags sit above all of these. They are parsed by the binary
//! into a separate [`PathConfig`] and applied by the path resolver.

pub mod constants;
pub mod settings;

pub use constants::DEFAULT_CONFIG_FILE;
pub use settings::{GeneralConfig, LogLevel, PathConfig};

use jmxbeat_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub path: PathConfig,
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// contains invalid TOML.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration with fallback to defaults
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_or_default(path: &Path) -> Result<Self, Error> {
        match Self::load_from_file(path).await {
            Err(Error::Config(ConfigError::NotFound { .. })) => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Merge with environment variables
    ///
    /// Non-empty `JMXPROXYBEAT_PATH_*` variables replace the matching
    /// `[path]` value. `JMXPROXYBEAT_LOG_LEVEL` replaces `general.log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if `JMXPROXYBEAT_LOG_LEVEL` is not a known level.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        let fields = [
            (constants::ENV_PATH_HOME, &mut self.path.home),
            (constants::ENV_PATH_CONFIG, &mut self.path.config),
            (constants::ENV_PATH_DATA, &mut self.path.data),
            (constants::ENV_PATH_LOGS, &mut self.path.logs),
        ];
        for (var, field) in fields {
            if let Some(value) = non_empty_var(var) {
                debug!(var, value = ?value, "Path taken from environment");
                *field = Some(PathBuf::from(value));
            }
        }

        if let Some(level) = non_empty_var(constants::ENV_LOG_LEVEL) {
            let level = level.to_string_lossy();
            self.general.log_level = level.parse().map_err(|_| ConfigError::InvalidValue {
                field: constants::ENV_LOG_LEVEL.to_string(),
                value: level.to_string(),
            })?;
        }

        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    std::env::var_os(name).filter(|value| !value.is_empty())
}
