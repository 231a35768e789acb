//! jmxproxybeat - collect JMX metrics through a JMX proxy
//!
//! The binary resolves its directories, loads configuration and sets up
//! logging before handing control to the beat runtime.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use jmxbeat_config::{Config, PathConfig, DEFAULT_CONFIG_FILE};
use jmxbeat_paths::{PathCategory, PathResolver};
use std::path::Path;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if json_mode {
            let value = serde_json::json!({
                "error": e.to_string(),
                "code": e.code(),
            });
            println!("{value}");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    // Configuration precedence:
    // 1. Defaults and the config file
    // 2. Environment variables
    // 3. CLI flags (highest precedence)
    let overrides = cli.global.path_overrides();

    let config_file = locate_config_file(cli.global.config.as_deref(), &overrides)?;
    let mut config = if cli.global.config.is_some() {
        Config::load_from_file(&config_file).await?
    } else {
        Config::load_or_default(&config_file).await?
    };
    config.merge_env()?;

    let paths = PathResolver::from_config(&config.path, &overrides)?;

    logging::init_tracing(
        &paths,
        config.general.log_level,
        cli.global.json,
        cli.global.debug,
    );
    info!("Starting jmxproxybeat v{}", env!("CARGO_PKG_VERSION"));
    info!(config_file = %config_file.display(), "Configuration loaded");
    info!("{}", paths.describe());

    let renderer = OutputRenderer::new(cli.global.json);
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            info!("Startup complete");
        }
        Commands::Paths => renderer.render_paths(&paths)?,
        Commands::Resolve { category, path } => {
            let resolved = paths.resolve(category, &path);
            renderer.render_resolved(category, &path, &resolved)?;
        }
    }

    Ok(())
}

/// Find the configuration file before the base configuration is known
///
/// Only the environment and the CLI flags can move the config path at this
/// point; a relative file name is resolved against it.
fn locate_config_file(
    flag: Option<&Path>,
    overrides: &PathConfig,
) -> Result<std::path::PathBuf, CliError> {
    let mut env_only = Config::default();
    env_only.merge_env()?;

    let bootstrap = PathResolver::resolved(&env_only.path, overrides)?;
    let name = flag.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    Ok(bootstrap.resolve(PathCategory::Config, name))
}
