//! Command execution.

use std::fmt;
use std::io;
use std::path::Path;

use ledgerly_core::apportion::{bps_base_part, bps_part, percent_part};
use ledgerly_core::tax::{
    ReportPeriod, TaxBreakdown, TaxRate, TaxSummary, TaxSummaryService, TaxedItem,
};
use ledgerly_shared::types::{Amount, Currency, Money};
use ledgerly_shared::{AppConfig, AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::Commands;

/// Items read by the `summary` command.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryInput {
    /// Incomes, carrying collected tax.
    #[serde(default)]
    pub collected: Vec<TaxedItem>,
    /// Expenses, carrying paid tax.
    #[serde(default)]
    pub paid: Vec<TaxedItem>,
}

/// Result of a command, printable as text or JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// A single amount.
    Amount {
        /// Amount in minor units.
        amount: Amount,
    },
    /// Base / tax / total split.
    Breakdown {
        /// The split itself.
        #[serde(flatten)]
        breakdown: TaxBreakdown,
        /// Rate applied.
        rate: TaxRate,
        /// Display currency.
        currency: Currency,
    },
    /// Tax summary for a period.
    Summary {
        /// Per-tax totals.
        #[serde(flatten)]
        summary: TaxSummary,
        /// Collected minus paid tax.
        net_payable: Amount,
        /// Display currency.
        currency: Currency,
    },
}

/// Runs `command` against the loaded configuration.
pub fn run(command: &Commands, config: &AppConfig) -> AppResult<Outcome> {
    match command {
        Commands::Percent { amount, percent } => Ok(Outcome::Amount {
            amount: percent_part(*amount, *percent)?,
        }),
        Commands::Bps { amount, bps } => Ok(Outcome::Amount {
            amount: bps_part(*amount, *bps)?,
        }),
        Commands::Base { total, bps } => {
            let bps = bps.unwrap_or(config.tax.default_rate_bps);
            Ok(Outcome::Amount {
                amount: bps_base_part(*total, bps)?,
            })
        }
        Commands::Breakdown {
            amount,
            bps,
            exclusive,
            currency,
        } => {
            let rate = TaxRate::from_bps(bps.unwrap_or(config.tax.default_rate_bps));
            let breakdown = if *exclusive {
                TaxBreakdown::from_exclusive(*amount, rate)?
            } else {
                TaxBreakdown::from_inclusive(*amount, rate)?
            };
            Ok(Outcome::Breakdown {
                breakdown,
                rate,
                currency: currency.unwrap_or(config.tax.default_currency),
            })
        }
        Commands::Summary { file, from, to } => {
            let period = ReportPeriod::new(*from, *to)?;
            let input = read_summary_input(file)?;
            info!(
                collected = input.collected.len(),
                paid = input.paid.len(),
                "Summarizing taxed items"
            );
            let summary = TaxSummaryService::summarize(period, &input.collected, &input.paid)?;
            let net_payable = summary.net_payable()?;
            Ok(Outcome::Summary {
                summary,
                net_payable,
                currency: config.tax.default_currency,
            })
        }
    }
}

fn read_summary_input(path: &Path) -> AppResult<SummaryInput> {
    debug!(path = %path.display(), "Reading summary input");
    let raw = std::fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Validation(format!("Invalid summary input: {e}")))
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount { amount } => write!(f, "{amount}"),
            Self::Breakdown {
                breakdown,
                rate,
                currency,
            } => {
                writeln!(f, "base:  {}", Money::new(breakdown.base, *currency))?;
                writeln!(f, "tax:   {} ({rate})", Money::new(breakdown.tax, *currency))?;
                write!(f, "total: {}", Money::new(breakdown.total, *currency))
            }
            Self::Summary {
                summary,
                net_payable,
                currency,
            } => {
                writeln!(f, "period: {} to {}", summary.period.from(), summary.period.to())?;
                for (label, totals) in [("collected", &summary.collected), ("paid", &summary.paid)] {
                    writeln!(f, "{label}:")?;
                    for t in totals {
                        writeln!(
                            f,
                            "  tax {} ({}): {} items, base {}, tax {}",
                            t.tax_id,
                            t.rate,
                            t.included_items_number,
                            Money::new(t.included_items_amount, *currency),
                            Money::new(t.tax_amount, *currency),
                        )?;
                    }
                }
                write!(f, "net payable: {}", Money::new(*net_payable, *currency))
            }
        }
    }
}
