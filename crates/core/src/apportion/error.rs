//! Apportionment error types.

use ledgerly_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while apportioning an amount.
///
/// None of these are retryable: each one means the caller passed inputs
/// outside the range the calculation can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApportionError {
    /// An intermediate value or the result does not fit the target type.
    #[error("Arithmetic overflow while apportioning amount")]
    Overflow,

    /// The divisor of the apportionment is zero.
    #[error("Division by zero while apportioning amount")]
    DivisionByZero,

    /// The rounded quotient still carries a fractional part.
    #[error("Rounded quotient {0} is not an integer")]
    NotIntegral(Decimal),
}

impl ApportionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow => "APPORTION_OVERFLOW",
            Self::DivisionByZero => "APPORTION_DIVISION_BY_ZERO",
            Self::NotIntegral(_) => "APPORTION_NOT_INTEGRAL",
        }
    }
}

impl From<ApportionError> for AppError {
    fn from(err: ApportionError) -> Self {
        match err {
            ApportionError::DivisionByZero => Self::Validation(err.to_string()),
            ApportionError::Overflow | ApportionError::NotIntegral(_) => {
                Self::Arithmetic(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApportionError::Overflow.error_code(), "APPORTION_OVERFLOW");
        assert_eq!(
            ApportionError::DivisionByZero.error_code(),
            "APPORTION_DIVISION_BY_ZERO"
        );
        assert_eq!(
            ApportionError::NotIntegral(dec!(1.5)).error_code(),
            "APPORTION_NOT_INTEGRAL"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApportionError::NotIntegral(dec!(1.5)).to_string(),
            "Rounded quotient 1.5 is not an integer"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = ApportionError::DivisionByZero.into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = ApportionError::Overflow.into();
        assert_eq!(err.error_code(), "ARITHMETIC_ERROR");
        assert_eq!(
            err.to_string(),
            "Arithmetic error: Arithmetic overflow while apportioning amount"
        );
    }
}
