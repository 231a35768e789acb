//! Command line interface definition

use clap::{Parser, Subcommand};
use jmxbeat_config::PathConfig;
use jmxbeat_paths::PathCategory;
use std::path::PathBuf;

/// jmxproxybeat - collect JMX metrics through a JMX proxy
#[derive(Parser)]
#[command(name = "jmxproxybeat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect JMX metrics through a JMX proxy")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Write debug logs as JSON into the logs path
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file, relative to the config path unless absolute
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Home path
    #[arg(long = "path.home", global = true, value_name = "PATH")]
    pub path_home: Option<PathBuf>,

    /// Configuration path
    #[arg(long = "path.config", global = true, value_name = "PATH")]
    pub path_config: Option<PathBuf>,

    /// Data path
    #[arg(long = "path.data", global = true, value_name = "PATH")]
    pub path_data: Option<PathBuf>,

    /// Logs path
    #[arg(long = "path.logs", global = true, value_name = "PATH")]
    pub path_logs: Option<PathBuf>,
}

impl GlobalArgs {
    /// Path values given on the command line, the highest precedence layer
    pub fn path_overrides(&self) -> PathConfig {
        PathConfig {
            home: self.path_home.clone(),
            config: self.path_config.clone(),
            data: self.path_data.clone(),
            logs: self.path_logs.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize paths and start the beat (default)
    Run,

    /// Show the resolved home, config, data and logs paths
    Paths,

    /// Resolve a path against one of the path categories
    Resolve {
        /// Category to resolve against
        #[arg(value_enum)]
        category: PathCategory,

        /// Relative or absolute path
        path: PathBuf,
    },
}
