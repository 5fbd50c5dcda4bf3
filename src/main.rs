//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `text_scout` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All request handling is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use text_scout::initialization::init_logger_with;
use text_scout::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; flags and the real environment still apply
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("text_scout error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
