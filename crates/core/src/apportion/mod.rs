//! Monetary apportionment of integer minor-unit amounts.
//!
//! CRITICAL: Rounding strategy for apportionment:
//! - Multiply first, divide once, round once
//! - Round half away from zero at zero decimal places
//! - Intermediate values are `Decimal`, never floating point

pub mod engine;
pub mod error;

#[cfg(test)]
mod props;

pub use engine::{BPS_SCALE, PERCENT_SCALE, bps_base_part, bps_part, percent_part};
pub use error::ApportionError;
