//! Tax summary generation.

use std::collections::BTreeMap;

use ledgerly_shared::types::TaxId;
use tracing::debug;

use super::breakdown::TaxBreakdown;
use super::error::TaxError;
use super::types::{ReportPeriod, TaxSummary, TaxTotals, TaxedItem};

/// Service for generating tax summaries.
pub struct TaxSummaryService;

impl TaxSummaryService {
    /// Summarizes collected (income) and paid (expense) tax for a period.
    ///
    /// Each item is split into base and tax on its own before summing, so
    /// the totals match the sum of what was reported per item. Items dated
    /// outside the period are ignored. Output is ordered by tax ID.
    pub fn summarize(
        period: ReportPeriod,
        collected: &[TaxedItem],
        paid: &[TaxedItem],
    ) -> Result<TaxSummary, TaxError> {
        let collected = Self::aggregate(&period, collected)?;
        let paid = Self::aggregate(&period, paid)?;

        debug!(
            from = %period.from(),
            to = %period.to(),
            collected_taxes = collected.len(),
            paid_taxes = paid.len(),
            "Tax summary generated"
        );

        Ok(TaxSummary {
            period,
            collected,
            paid,
        })
    }

    fn aggregate(period: &ReportPeriod, items: &[TaxedItem]) -> Result<Vec<TaxTotals>, TaxError> {
        let mut totals: BTreeMap<TaxId, TaxTotals> = BTreeMap::new();
        let mut skipped = 0usize;

        for item in items {
            if !period.contains(item.date) {
                skipped += 1;
                continue;
            }

            let entry = totals
                .entry(item.tax_id)
                .or_insert_with(|| TaxTotals::empty(item.tax_id, item.rate));
            if entry.rate != item.rate {
                return Err(TaxError::InconsistentRate {
                    tax_id: item.tax_id,
                    expected: entry.rate,
                    got: item.rate,
                });
            }

            let breakdown = TaxBreakdown::from_inclusive(item.amount, item.rate)?;
            entry.add(&breakdown)?;
        }

        if skipped > 0 {
            debug!(skipped, "Ignored items outside the report period");
        }

        Ok(totals.into_values().collect())
    }
}
