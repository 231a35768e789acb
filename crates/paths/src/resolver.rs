//! Startup-time computation of the canonical directories

use crate::PathCategory;
use jmxbeat_config::PathConfig;
use jmxbeat_errors::PathError;
use serde::Serialize;
use std::fmt;
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Permission bits requested for the data directory
pub const DATA_DIR_MODE: u32 = 0o755;

/// The four canonical directories of a running beat
///
/// Created empty by [`PathResolver::new`], filled by [`PathResolver::init`]
/// during startup and read through shared references afterwards. `init` takes
/// `&mut self`, so no reader can observe a half-computed resolver.
///
/// Until `init` has succeeded every field is empty and [`resolve`] only
/// joins onto an empty base.
///
/// [`resolve`]: PathResolver::resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResolver {
    home: PathBuf,
    config: PathBuf,
    data: PathBuf,
    logs: PathBuf,
}

impl PathResolver {
    /// Create an uninitialized resolver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver and initialize it
    ///
    /// # Errors
    ///
    /// Same as [`PathResolver::init`].
    pub fn from_config(supplied: &PathConfig, overrides: &PathConfig) -> Result<Self, PathError> {
        let mut paths = Self::new();
        paths.init(supplied, overrides)?;
        Ok(paths)
    }

    /// Compute the four directories without touching the filesystem
    ///
    /// Per field, a non-empty override replaces the supplied value. Then:
    ///
    /// - `home` defaults to the directory of the running executable
    /// - `config` defaults to `home`
    /// - `data` defaults to `home/data`
    /// - `logs` defaults to `home/logs`
    ///
    /// A relative `home` is made absolute against the working directory and
    /// relative `config`, `data` and `logs` values are anchored at `home`.
    /// Absolute values are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::HomeUnresolvable`] if the home directory cannot be
    /// turned into an absolute path.
    pub fn resolved(supplied: &PathConfig, overrides: &PathConfig) -> Result<Self, PathError> {
        let merged = supplied.merged_with(overrides);

        let home = match merged.home() {
            Some(home) => absolute(home)?,
            None => executable_dir()?,
        };

        let config = merged
            .config()
            .map_or_else(|| home.clone(), |config| home.join(config));
        let data = merged
            .data()
            .map_or_else(|| home.join("data"), |data| home.join(data));
        let logs = merged
            .logs()
            .map_or_else(|| home.join("logs"), |logs| home.join(logs));

        let paths = Self {
            home,
            config,
            data,
            logs,
        };
        for category in PathCategory::ALL {
            debug!(category = %category, path = %paths.dir(category).display(), "Resolved path");
        }
        Ok(paths)
    }

    /// Compute the four directories and make sure the data directory exists
    ///
    /// Recomputes every field from `supplied` and `overrides` alone; nothing
    /// from a previous call is carried over. The data directory and any
    /// missing parents are created with mode [`DATA_DIR_MODE`]. A directory
    /// that already exists is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::HomeUnresolvable`] if the home directory cannot be
    /// determined, or [`PathError::DataDirCreateFailed`] if the data directory
    /// cannot be created. After an error the resolver must not be used.
    pub fn init(
        &mut self,
        supplied: &PathConfig,
        overrides: &PathConfig,
    ) -> Result<(), PathError> {
        *self = Self::resolved(supplied, overrides)?;

        create_data_dir(&self.data)?;

        info!(paths = %self, "Paths initialized");
        Ok(())
    }

    /// Resolve `path` against the directory of `category`
    ///
    /// Absolute paths are returned unchanged whatever the category.
    #[must_use]
    pub fn resolve(&self, category: PathCategory, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.dir(category).join(path)
    }

    /// Directory backing `category`
    #[must_use]
    pub fn dir(&self, category: PathCategory) -> &Path {
        match category {
            PathCategory::Home => &self.home,
            PathCategory::Config => &self.config,
            PathCategory::Data => &self.data,
            PathCategory::Logs => &self.logs,
        }
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    #[must_use]
    pub fn config(&self) -> &Path {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &Path {
        &self.data
    }

    #[must_use]
    pub fn logs(&self) -> &Path {
        &self.logs
    }

    /// Whether all four directories have been computed
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        PathCategory::ALL
            .into_iter()
            .all(|category| !self.dir(category).as_os_str().is_empty())
    }

    /// Single-line summary of the four directories for diagnostics
    ///
    /// The field order is fixed: home, config, data, logs.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Home path: [{}] Config path: [{}] Data path: [{}] Logs path: [{}]",
            self.home.display(),
            self.config.display(),
            self.data.display(),
            self.logs.display()
        )
    }
}

fn absolute(path: &Path) -> Result<PathBuf, PathError> {
    std::path::absolute(path).map_err(|e| PathError::HomeUnresolvable {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Directory containing the running executable
fn executable_dir() -> Result<PathBuf, PathError> {
    let exe = std::env::current_exe().map_err(|e| PathError::HomeUnresolvable {
        path: "current executable".to_string(),
        message: e.to_string(),
    })?;
    let dir = exe.parent().ok_or_else(|| PathError::HomeUnresolvable {
        path: exe.display().to_string(),
        message: "executable has no parent directory".to_string(),
    })?;
    absolute(dir)
}

fn create_data_dir(path: &Path) -> Result<(), PathError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DATA_DIR_MODE);
    }

    builder
        .create(path)
        .map_err(|e| PathError::DataDirCreateFailed {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

    debug!(path = %path.display(), "Data path ready");
    Ok(())
}
