//! Tax error types.

use chrono::NaiveDate;
use ledgerly_shared::AppError;
use ledgerly_shared::types::TaxId;
use thiserror::Error;

use super::rate::TaxRate;
use crate::apportion::ApportionError;

/// Errors that can occur during tax calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// Business-use percentage of an expense must be within 0..=100.
    #[error("Percent on business must be between 0 and 100, got {0}")]
    InvalidPercentOnBusiness(i64),

    /// Items reported under the same tax carry different rates.
    #[error("Tax {tax_id} has inconsistent rates: expected {expected}, got {got}")]
    InconsistentRate {
        /// The tax the items belong to.
        tax_id: TaxId,
        /// Rate of the first item seen for this tax.
        expected: TaxRate,
        /// Conflicting rate.
        got: TaxRate,
    },

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Underlying apportionment failed.
    #[error(transparent)]
    Apportion(#[from] ApportionError),
}

impl TaxError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPercentOnBusiness(_) => "INVALID_PERCENT_ON_BUSINESS",
            Self::InconsistentRate { .. } => "INCONSISTENT_TAX_RATE",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::Apportion(err) => err.error_code(),
        }
    }
}

impl From<TaxError> for AppError {
    fn from(err: TaxError) -> Self {
        match err {
            TaxError::Apportion(inner) => inner.into(),
            TaxError::InvalidPercentOnBusiness(_)
            | TaxError::InconsistentRate { .. }
            | TaxError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
        }
    }
}
