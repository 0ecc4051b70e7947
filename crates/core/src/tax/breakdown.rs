//! Splitting amounts into base and tax.

use ledgerly_shared::types::Amount;
use serde::{Deserialize, Serialize};

use super::error::TaxError;
use super::rate::TaxRate;
use crate::apportion::{ApportionError, PERCENT_SCALE, percent_part};

/// An amount split into its tax-exclusive base and the tax on it.
///
/// `base + tax == total` always holds exactly; rounding only ever moves the
/// boundary between base and tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Tax-exclusive amount.
    pub base: Amount,
    /// Tax amount.
    pub tax: Amount,
    /// Tax-inclusive amount.
    pub total: Amount,
}

impl TaxBreakdown {
    /// Splits a tax-inclusive `total` recorded at `rate`.
    ///
    /// # Example
    ///
    /// ```
    /// use ledgerly_core::tax::{TaxBreakdown, TaxRate};
    ///
    /// let split = TaxBreakdown::from_inclusive(10_750, TaxRate::from_bps(750)).unwrap();
    /// assert_eq!((split.base, split.tax), (10_000, 750));
    /// ```
    pub fn from_inclusive(total: Amount, rate: TaxRate) -> Result<Self, ApportionError> {
        let base = rate.base_of(total)?;
        let tax = total.checked_sub(base).ok_or(ApportionError::Overflow)?;
        Ok(Self { base, tax, total })
    }

    /// Adds tax at `rate` on top of a tax-exclusive `base`.
    pub fn from_exclusive(base: Amount, rate: TaxRate) -> Result<Self, ApportionError> {
        let tax = rate.tax_on(base)?;
        let total = base.checked_add(tax).ok_or(ApportionError::Overflow)?;
        Ok(Self { base, tax, total })
    }
}

/// Portion of an expense attributable to the business.
///
/// Expenses used partly for private purposes only count
/// `percent_on_business`% towards reporting.
pub fn business_portion(amount: Amount, percent_on_business: i64) -> Result<Amount, TaxError> {
    if !(0..=PERCENT_SCALE).contains(&percent_on_business) {
        return Err(TaxError::InvalidPercentOnBusiness(percent_on_business));
    }
    Ok(percent_part(amount, percent_on_business)?)
}
