//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_checker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the report table
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ip_checker::initialization::init_logger_with;
use ip_checker::{run_lookup, Config};

/// Look up ownership, reputation and location of an IP address.
///
/// Requires an ipdata.co API key in `IPDATA_API_KEY` (environment or `.env`).
#[derive(Debug, Parser)]
#[command(name = "ip_checker", version, about)]
struct Cli {
    /// IPv4 or IPv6 address to look up
    #[arg(long)]
    ip: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting IPDATA_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from_env(cli.ip).context("Failed to read configuration")?;

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) => {
            print!("{}", report.render());
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
