//! Basis-point tax rates.

use ledgerly_shared::types::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::apportion::{ApportionError, BPS_SCALE, bps_base_part, bps_part};

/// A tax rate in basis points (750 = 7.5%).
///
/// Serialized as the bare basis-point integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(i64);

impl TaxRate {
    /// No tax.
    pub const ZERO: Self = Self(0);

    /// Creates a rate from basis points.
    #[must_use]
    pub const fn from_bps(bps: i64) -> Self {
        Self(bps)
    }

    /// Creates a rate from a whole percentage.
    pub fn from_percent(percent: i64) -> Result<Self, ApportionError> {
        percent
            .checked_mul(BPS_SCALE / 100)
            .map(Self)
            .ok_or(ApportionError::Overflow)
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn bps(self) -> i64 {
        self.0
    }

    /// Returns true if no tax applies.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the rate as a percentage, e.g. `7.5` for 750 bps.
    #[must_use]
    pub fn as_percent(self) -> Decimal {
        Decimal::new(self.0, 2).normalize()
    }

    /// Tax due on a tax-exclusive `base`.
    pub fn tax_on(self, base: Amount) -> Result<Amount, ApportionError> {
        bps_part(base, self.0)
    }

    /// Tax-exclusive base contained in a tax-inclusive `total`.
    pub fn base_of(self, total: Amount) -> Result<Amount, ApportionError> {
        bps_base_part(total, self.0)
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
