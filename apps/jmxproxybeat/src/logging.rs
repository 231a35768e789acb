//! Tracing subscriber setup
//!
//! Runs after path initialization because debug logs are written into the
//! logs path.

use jmxbeat_config::LogLevel;
use jmxbeat_paths::{PathCategory, PathResolver};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// - `--debug`: JSON records to `<logs>/jmxproxybeat-<timestamp>.log`
/// - `--json` without `--debug`: logging disabled so stdout stays parseable
/// - otherwise: human-readable records on stderr
pub fn init_tracing(paths: &PathResolver, level: LogLevel, json_mode: bool, debug: bool) {
    if debug {
        match create_log_file(paths) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(env_filter(
                        "info,jmxproxybeat=debug,jmxbeat_paths=debug,jmxbeat_config=debug",
                    ))
                    .init();
                return;
            }
            Err((path, e)) => {
                if !json_mode {
                    eprintln!("Warning: Failed to create log file {}: {e}", path.display());
                }
            }
        }
    }

    if json_mode {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter(level.as_str()))
            .init();
    }
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn create_log_file(paths: &PathResolver) -> Result<File, (PathBuf, std::io::Error)> {
    let log_file = paths.resolve(
        PathCategory::Logs,
        format!(
            "jmxproxybeat-{}.log",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ),
    );

    std::fs::create_dir_all(paths.logs()).map_err(|e| (paths.logs().to_path_buf(), e))?;
    File::create(&log_file).map_err(|e| (log_file, e))
}
