//! Core configuration records shared across crates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Default verbosity used when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(s.to_string()),
        }
    }
}

/// Path configuration
///
/// Used twice at startup: once as the base record (file and environment) and
/// once as the override record built from command line flags. An unset field
/// and an empty string both mean "not specified".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    pub home: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub logs: Option<PathBuf>,
}

impl PathConfig {
    /// Home path, if specified
    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        specified(self.home.as_ref())
    }

    /// Config path, if specified
    #[must_use]
    pub fn config(&self) -> Option<&Path> {
        specified(self.config.as_ref())
    }

    /// Data path, if specified
    #[must_use]
    pub fn data(&self) -> Option<&Path> {
        specified(self.data.as_ref())
    }

    /// Logs path, if specified
    #[must_use]
    pub fn logs(&self) -> Option<&Path> {
        specified(self.logs.as_ref())
    }

    /// True when no field carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.home().is_none()
            && self.config().is_none()
            && self.data().is_none()
            && self.logs().is_none()
    }

    /// Overlay `overrides` on top of `self`, field by field.
    ///
    /// A field takes the override value when the override specifies one and
    /// keeps the base value otherwise.
    #[must_use]
    pub fn merged_with(&self, overrides: &PathConfig) -> PathConfig {
        let pick = |base: Option<&Path>, over: Option<&Path>| over.or(base).map(Path::to_path_buf);
        PathConfig {
            home: pick(self.home(), overrides.home()),
            config: pick(self.config(), overrides.config()),
            data: pick(self.data(), overrides.data()),
            logs: pick(self.logs(), overrides.logs()),
        }
    }
}

fn specified(value: Option<&PathBuf>) -> Option<&Path> {
    value
        .map(PathBuf::as_path)
        .filter(|path| !path.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_unspecified() {
        let cfg = PathConfig {
            home: Some(PathBuf::new()),
            config: None,
            data: Some(PathBuf::from("")),
            logs: None,
        };
        assert!(cfg.is_empty());
        assert_eq!(cfg.home(), None);
    }

    #[test]
    fn overrides_win_per_field() {
        let base = PathConfig {
            home: Some("/opt/app".into()),
            config: Some("/etc/app".into()),
            data: None,
            logs: Some("/var/log/app".into()),
        };
        let overrides = PathConfig {
            home: None,
            config: Some("".into()),
            data: Some("/var/lib/app".into()),
            logs: Some("/tmp/logs".into()),
        };

        let merged = base.merged_with(&overrides);

        assert_eq!(merged.home(), Some(Path::new("/opt/app")));
        assert_eq!(merged.config(), Some(Path::new("/etc/app")));
        assert_eq!(merged.data(), Some(Path::new("/var/lib/app")));
        assert_eq!(merged.logs(), Some(Path::new("/tmp/logs")));
    }

    #[test]
    fn log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
