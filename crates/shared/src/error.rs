//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Domain crates convert their own errors into one of these variants at the
/// boundary; callers only need the code and status to surface them.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied an input that violates a calculation contract.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A calculation could not be represented exactly.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing an input/output file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Arithmetic(_) => 422,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Arithmetic(_) => "ARITHMETIC_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
