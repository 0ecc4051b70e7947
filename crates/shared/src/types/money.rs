//! Money type with integer minor units and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are whole numbers of the currency's smallest unit (e.g., cents);
//! `rust_decimal::Decimal` is only used to present them in major units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An exact number of minor currency units.
///
/// `i64` holds about 9.2 * 10^18 minor units, well above any realistic
/// bookkeeping total.
pub type Amount = i64;

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    pub amount: Amount,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Number of decimal places between the minor and the major unit.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Usd | Self::Idr | Self::Eur | Self::Sgd => 2,
            Self::Jpy => 0,
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Returns the amount in major units, e.g. `10750` USD cents as `107.50`.
    #[must_use]
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.decimal_places())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_major(), self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(AppError::Validation(format!("Unknown currency: {s}"))),
        }
    }
}
