#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Canonical directory resolution for jmxproxybeat
//!
//! Four directories are defined:
//!
//! - `home`: the default folder for everything that does not fit the
//!   categories below
//! - `config`: configuration files
//! - `data`: files expected to change during normal operation (registry,
//!   identifiers)
//! - `logs`: log output
//!
//! They are computed once at startup from a base [`PathConfig`] (file and
//! environment) and an override [`PathConfig`] (command line flags), and any
//! relative path can then be resolved against one of them:
//!
//! ```no_run
//! use jmxbeat_config::PathConfig;
//! use jmxbeat_paths::{PathCategory, PathResolver};
//!
//! # fn main() -> Result<(), jmxbeat_errors::PathError> {
//! let paths = PathResolver::from_config(&PathConfig::default(), &PathConfig::default())?;
//! let cfg_file = paths.resolve(PathCategory::Config, "jmxproxybeat.toml");
//! # let _ = cfg_file;
//! # Ok(())
//! # }
//! ```

mod category;
mod resolver;

pub use category::PathCategory;
pub use jmxbeat_config::PathConfig;
pub use resolver::{PathResolver, DATA_DIR_MODE};
