use coll_config::Config;
use coll_server::{Cli, Server, logger};

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_level = cli.log_level.unwrap_or(config.logging.level);
    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(log_level, log_file, config.logging.colored)?;

    info!("Starting coll-server v{}", env!("CARGO_PKG_VERSION"));
    if config.is_created() {
        info!("Created default config file: {}", config.path().display());
    }
    info!("Using config file: {}", config.path().display());
    config.log_summary();

    let server = Server::new(config.bind_addr(), cli.limit);

    // Spawn signal handler for graceful shutdown
    let shutdown = server.shutdown_coordinator();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    server.serve().await?;

    Ok(())
}
