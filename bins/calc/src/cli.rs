//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ledgerly_shared::types::Currency;

/// Ledgerly tax and apportionment calculator.
#[derive(Parser, Debug)]
#[command(name = "ledgerly", version, about = "Ledgerly tax and apportionment calculator")]
pub struct Cli {
    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding `default.toml` and per-mode overrides.
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Calculator commands. Amounts are integer minor units (e.g., cents).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Whole-percent share of an amount.
    Percent {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Percentage, e.g. 50.
        #[arg(allow_negative_numbers = true)]
        percent: i64,
    },
    /// Basis-point share of an amount.
    Bps {
        /// Amount in minor units.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Rate in basis points, e.g. 750 for 7.5%.
        #[arg(allow_negative_numbers = true)]
        bps: i64,
    },
    /// Tax-exclusive base of a tax-inclusive total.
    Base {
        /// Tax-inclusive total in minor units.
        #[arg(allow_negative_numbers = true)]
        total: i64,
        /// Tax rate in basis points; defaults to the configured rate.
        #[arg(long, allow_negative_numbers = true)]
        bps: Option<i64>,
    },
    /// Split an amount into base, tax and total.
    Breakdown {
        /// Amount in minor units; tax-inclusive unless `--exclusive`.
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Tax rate in basis points; defaults to the configured rate.
        #[arg(long, allow_negative_numbers = true)]
        bps: Option<i64>,
        /// Treat the amount as tax-exclusive.
        #[arg(long)]
        exclusive: bool,
        /// Currency used for display; defaults to the configured currency.
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// Collected vs paid tax from a JSON file of taxed items.
    Summary {
        /// File with `{"collected": [...], "paid": [...]}`.
        file: PathBuf,
        /// First day of the report period (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,
        /// Last day of the report period (YYYY-MM-DD).
        #[arg(long)]
        to: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_amounts() {
        let cli = Cli::try_parse_from(["ledgerly", "percent", "-1001", "50"]).unwrap();
        match cli.command {
            Commands::Percent { amount, percent } => {
                assert_eq!(amount, -1001);
                assert_eq!(percent, 50);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parses_breakdown_options() {
        let cli = Cli::try_parse_from([
            "ledgerly",
            "--json",
            "breakdown",
            "10000",
            "--bps",
            "750",
            "--exclusive",
            "--currency",
            "eur",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Breakdown {
                amount,
                bps,
                exclusive,
                currency,
            } => {
                assert_eq!(amount, 10_000);
                assert_eq!(bps, Some(750));
                assert!(exclusive);
                assert_eq!(currency, Some(Currency::Eur));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_date() {
        assert!(
            Cli::try_parse_from([
                "ledgerly", "summary", "items.json", "--from", "2024-13-01", "--to", "2024-12-31",
            ])
            .is_err()
        );
    }
}
