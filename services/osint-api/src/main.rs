//! OSINT indicator API CLI

use std::path::PathBuf;

use clap::Parser;
use osint_api::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "osint-api")]
#[command(about = "Indicator API and rule engine for the OSINT warning dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Indicator definitions file (overrides config file)
    #[arg(long)]
    definitions: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(definitions) = args.definitions {
        config.definitions = Some(definitions);
    }

    tracing::info!("Starting indicator API");
    osint_api::run(config).await?;

    Ok(())
}
