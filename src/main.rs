//! mapship - post-build sourcemap publisher for Elastic APM.
//!
//! CLI entry point.

use clap::Parser;
use mapship::{Config, Publisher};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("mapship=debug,info")
    } else {
        EnvFilter::new("mapship=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let publisher = match Publisher::new(config) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create publisher: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Per-upload HTTP failures are logged inside the run and never fail the
    // process; only a discovery or file-read error does.
    if let Err(e) = publisher.run().await {
        error!("Sourcemap publish failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
