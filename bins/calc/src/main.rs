//! Ledgerly calculator
//!
//! Command-line front end over the apportionment and tax logic, for checking
//! figures by hand and scripting reports.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use tracing::debug;

use ledgerly_shared::AppConfig;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_from(&cli.config_dir)?;

    // Initialize tracing
    logging::init(cli.verbose, config.log.format);
    debug!(
        config_dir = %cli.config_dir,
        default_rate_bps = config.tax.default_rate_bps,
        default_currency = %config.tax.default_currency,
        "Configuration loaded"
    );

    let outcome = commands::run(&cli.command, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{outcome}");
    }

    Ok(())
}
