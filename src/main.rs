//! Shapeview CLI - shapefile upload and layer state tool

use clap::Parser;
use env_logger::Env;
use log::info;

use shapeview::cli::{Cli, Commands};
use shapeview::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Shapeview v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Classify { files }) => shapeview::cli::commands::classify(&files),
        Some(Commands::Upload {
            files,
            color,
            endpoint,
        }) => shapeview::cli::commands::upload(&files, &color, endpoint.as_deref()).await,
        None => {
            println!("Shapeview v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}
