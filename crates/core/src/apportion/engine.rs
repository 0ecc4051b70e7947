//! Percentage and basis-point apportionment.
//!
//! All three operations reduce to `round(amount * numerator / denominator)`
//! evaluated on `Decimal` with `RoundingStrategy::MidpointAwayFromZero`:
//! - Rounds 500.5 → 501
//! - Rounds -500.5 → -501
//! - Rounds 500.49 → 500

use ledgerly_shared::types::Amount;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::error::ApportionError;

/// Denominator of a whole-number percentage.
pub const PERCENT_SCALE: i64 = 100;

/// Denominator of a basis-point rate (10000 bps = 100%).
pub const BPS_SCALE: i64 = 10_000;

/// Computes `percent`% of `amount`, rounded half up.
///
/// Fractional percentages are not accepted here; express them in basis
/// points and use [`bps_part`] instead.
///
/// # Example
///
/// ```
/// use ledgerly_core::apportion::percent_part;
///
/// assert_eq!(percent_part(1000, 50), Ok(500));
/// assert_eq!(percent_part(1001, 50), Ok(501));
/// ```
pub fn percent_part(amount: Amount, percent: i64) -> Result<Amount, ApportionError> {
    apportion(amount, percent, PERCENT_SCALE)
}

/// Computes the `bps` basis-point share of `amount`, rounded half up.
///
/// # Example
///
/// ```
/// use ledgerly_core::apportion::bps_part;
///
/// // 7.5% of $100.00
/// assert_eq!(bps_part(10_000, 750), Ok(750));
/// ```
pub fn bps_part(amount: Amount, bps: i64) -> Result<Amount, ApportionError> {
    apportion(amount, bps, BPS_SCALE)
}

/// Recovers the pre-tax base of a tax-inclusive `total_amount`.
///
/// Computes `total_amount * 10000 / (10000 + bps)`, rounded half up. The
/// embedded tax is `total_amount - base`.
///
/// # Example
///
/// ```
/// use ledgerly_core::apportion::bps_base_part;
///
/// // $107.50 including 7.5% tax has a $100.00 base
/// assert_eq!(bps_base_part(10_750, 750), Ok(10_000));
/// assert_eq!(bps_base_part(12_345, 0), Ok(12_345));
/// ```
pub fn bps_base_part(total_amount: Amount, bps: i64) -> Result<Amount, ApportionError> {
    let denominator = BPS_SCALE
        .checked_add(bps)
        .ok_or(ApportionError::Overflow)?;
    apportion(total_amount, BPS_SCALE, denominator)
}

fn apportion(amount: Amount, numerator: i64, denominator: i64) -> Result<Amount, ApportionError> {
    if denominator == 0 {
        return Err(ApportionError::DivisionByZero);
    }

    let product = Decimal::from(amount)
        .checked_mul(Decimal::from(numerator))
        .ok_or(ApportionError::Overflow)?;
    let quotient = product
        .checked_div(Decimal::from(denominator))
        .ok_or(ApportionError::Overflow)?;

    to_amount(quotient.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

fn to_amount(rounded: Decimal) -> Result<Amount, ApportionError> {
    if !rounded.fract().is_zero() {
        return Err(ApportionError::NotIntegral(rounded));
    }
    rounded.to_i64().ok_or(ApportionError::Overflow)
}
