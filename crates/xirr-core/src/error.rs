//! Error types for the core domain types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building dates and cash flow series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unrecognised day count convention name.
    #[error("Unknown day count convention: {name}")]
    UnknownDayCount {
        /// The name that failed to parse.
        name: String,
    },

    /// Parallel date and amount lists have different lengths.
    #[error("Length mismatch: {dates} dates and {amounts} amounts")]
    LengthMismatch {
        /// Number of dates supplied.
        dates: usize,
        /// Number of amounts supplied.
        amounts: usize,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
