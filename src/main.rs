//! Loading overlay demo
//!
//! Opens a window with a result list and the loading overlay on top of it.

mod demo;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use loading_overlay::config::{self, AppConfig};
use loading_overlay::logging;

/// Loading overlay demo
#[derive(Parser, Debug)]
#[command(name = "loading-overlay-demo")]
#[command(about = "Demo window for the egui loading overlay")]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_default_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the simulated load duration in milliseconds
    #[arg(long)]
    load_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    if args.write_default_config {
        logging::init(args.verbose);
        config::save_config(&AppConfig::default(), &config_path)?;
        info!("Wrote default configuration to {:?}", config_path);
        return Ok(());
    }

    let (mut config, loaded) = load_or_default(&config_path);
    logging::init(args.verbose || config.demo.debug_logging);
    match loaded {
        Ok(true) => info!("Loaded configuration from {:?}", config_path),
        Ok(false) => info!("Using default configuration"),
        Err(e) => warn!("Ignoring configuration {:?}: {:#}", config_path, e),
    }

    if let Some(ms) = args.load_ms {
        config.demo.load_duration_ms = ms;
    }

    demo::run_demo(config)?;

    info!("Demo closed");
    Ok(())
}

/// Load the configuration, falling back to defaults.
///
/// Logging is not set up yet, so the outcome is returned for reporting.
fn load_or_default(path: &std::path::Path) -> (AppConfig, Result<bool>) {
    if !path.exists() {
        return (AppConfig::default(), Ok(false));
    }
    match config::load_config(path) {
        Ok(config) => (config, Ok(true)),
        Err(e) => (AppConfig::default(), Err(e)),
    }
}
