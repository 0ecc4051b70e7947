//! Tax summary data types.

use chrono::NaiveDate;
use ledgerly_shared::types::{Amount, TaxId};
use serde::{Deserialize, Serialize};

use super::breakdown::TaxBreakdown;
use super::error::TaxError;
use super::rate::TaxRate;
use crate::apportion::ApportionError;

/// An income or expense carrying a tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxedItem {
    /// Tax applied to the item.
    pub tax_id: TaxId,
    /// Rate of that tax when the item was recorded.
    pub rate: TaxRate,
    /// Date the income was received or the expense was paid.
    pub date: NaiveDate,
    /// Tax-inclusive amount in the workspace's default currency.
    pub amount: Amount,
}

/// Inclusive date range of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    from: NaiveDate,
    to: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period, rejecting ranges that end before they start.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, TaxError> {
        if from > to {
            return Err(TaxError::InvalidDateRange {
                start: from,
                end: to,
            });
        }
        Ok(Self { from, to })
    }

    /// First day included.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day included.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    /// Returns true if `date` falls within the period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Totals of all items reported under one tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxTotals {
    /// Tax ID.
    pub tax_id: TaxId,
    /// Tax rate.
    pub rate: TaxRate,
    /// Number of items included.
    pub included_items_number: u64,
    /// Sum of the items' tax-exclusive bases.
    pub included_items_amount: Amount,
    /// Sum of the items' taxes.
    pub tax_amount: Amount,
}

impl TaxTotals {
    /// Creates empty totals for a tax.
    #[must_use]
    pub const fn empty(tax_id: TaxId, rate: TaxRate) -> Self {
        Self {
            tax_id,
            rate,
            included_items_number: 0,
            included_items_amount: 0,
            tax_amount: 0,
        }
    }

    /// Adds one item's breakdown to the totals.
    pub fn add(&mut self, breakdown: &TaxBreakdown) -> Result<(), ApportionError> {
        let amount = self
            .included_items_amount
            .checked_add(breakdown.base)
            .ok_or(ApportionError::Overflow)?;
        let tax = self
            .tax_amount
            .checked_add(breakdown.tax)
            .ok_or(ApportionError::Overflow)?;
        // Totals stay untouched unless both sums fit.
        self.included_items_amount = amount;
        self.tax_amount = tax;
        self.included_items_number += 1;
        Ok(())
    }
}

/// Collected and paid tax for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSummary {
    /// Period covered.
    pub period: ReportPeriod,
    /// Tax contained in incomes, per tax.
    pub collected: Vec<TaxTotals>,
    /// Tax contained in expenses, per tax.
    pub paid: Vec<TaxTotals>,
}

impl TaxSummary {
    /// Total collected tax.
    pub fn total_collected(&self) -> Result<Amount, ApportionError> {
        sum_tax(&self.collected)
    }

    /// Total paid tax.
    pub fn total_paid(&self) -> Result<Amount, ApportionError> {
        sum_tax(&self.paid)
    }

    /// Collected minus paid tax; negative when more tax was paid.
    pub fn net_payable(&self) -> Result<Amount, ApportionError> {
        self.total_collected()?
            .checked_sub(self.total_paid()?)
            .ok_or(ApportionError::Overflow)
    }
}

fn sum_tax(totals: &[TaxTotals]) -> Result<Amount, ApportionError> {
    totals.iter().try_fold(0i64, |sum, t| {
        sum.checked_add(t.tax_amount).ok_or(ApportionError::Overflow)
    })
}
