//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Wiring stdin/stdout to the interactive session
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ip_report::initialization::{init_client, init_logger_with};
use ip_report::{run_session, Config, LookupClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("ip_report error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let client = LookupClient::new(client, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = run_session(&client, &config.output_dir, stdin.lock(), stdout.lock()).await?;
    log::debug!("{:?}", report);
    Ok(())
}
