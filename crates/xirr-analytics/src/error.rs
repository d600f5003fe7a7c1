//! Error types for XIRR and NPV calculations.

use thiserror::Error;
use xirr_core::CoreError;
use xirr_math::MathError;

/// Why a calculation produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    // ========== Input Errors ==========
    /// The series holds no cash flows.
    #[error("cash flow series is empty")]
    EmptySeries,

    /// Amounts are not both positive and negative somewhere in the series.
    #[error("cash flows need at least one positive and one negative amount")]
    NoSignChange,

    /// Calculator settings are unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    // ========== Calculation Errors ==========
    /// The goal seek stopped without a root.
    #[error("solver failed: {0}")]
    Solver(#[from] MathError),

    /// A core type rejected its input, such as parallel date and amount
    /// lists of different lengths.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The solved rate cannot be expressed as a percentage.
    #[error("solved rate {rate} is not finite")]
    NonFiniteRate {
        /// The growth factor returned by the solver.
        rate: f64,
    },
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true if the input was rejected before any solver work.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries
                | Self::NoSignChange
                | Self::Core(CoreError::LengthMismatch { .. })
        )
    }
}
