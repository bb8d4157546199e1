//! Vibify CLI
//!
//! Command-line interface for the Vibify API

use clap::Parser;
use tracing::debug;
use vibify::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // Optional .env next to the working directory
    let env_file = dotenv::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Some(path) = env_file {
        debug!("Loaded environment variables from: {}", path.display());
    }

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
