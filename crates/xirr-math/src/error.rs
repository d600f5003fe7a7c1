//! Error types for root finding.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Ways a goal seek can stop without a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iteration cap reached without meeting the step tolerance.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Objective value at the last evaluated iterate.
        residual: f64,
    },

    /// An iterate left the search interval.
    #[error("Iterate {x} is outside [{xmin}, {xmax}]")]
    OutOfBounds {
        /// The offending iterate.
        x: f64,
        /// Lower bound.
        xmin: f64,
        /// Upper bound.
        xmax: f64,
    },

    /// The derivative at an iterate is exactly zero.
    #[error("Flat derivative at x = {x}")]
    FlatDerivative {
        /// The iterate where the derivative vanished.
        x: f64,
    },

    /// Both finite-difference points collapsed onto the iterate.
    #[error("Cannot estimate derivative at boundary point x = {x}")]
    DegenerateStep {
        /// The boundary iterate.
        x: f64,
    },

    /// The bracket closed on a sign change whose residual grew, as at a pole.
    #[error("Sign change at x = {x} is not a root (residual: {residual:.2e})")]
    Discontinuity {
        /// Where the bracket closed.
        x: f64,
        /// Objective value there.
        residual: f64,
    },

    /// The objective is undefined at the requested point.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the domain violation.
        reason: String,
    },

    /// Bracketing needs a sample of each sign.
    #[error("Incomplete bracket (positive sample: {has_positive}, negative sample: {has_negative})")]
    IncompleteBracket {
        /// Whether a positive sample is held.
        has_positive: bool,
        /// Whether a negative sample is held.
        has_negative: bool,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for failures that depend only on the objective, not on
    /// where the search started. No other starting point can avoid them.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = MathError::OutOfBounds {
            x: -8.5,
            xmin: -1.0,
            xmax: 1000.0,
        };
        assert_eq!(err.to_string(), "Iterate -8.5 is outside [-1, 1000]");
    }

    #[test]
    fn test_discontinuity_display() {
        let err = MathError::Discontinuity {
            x: 2.0,
            residual: -5.05e9,
        };
        assert_eq!(
            err.to_string(),
            "Sign change at x = 2 is not a root (residual: -5.05e9)"
        );
    }

    #[test]
    fn test_is_domain() {
        assert!(MathError::domain("negative day offset").is_domain());
        assert!(!MathError::FlatDerivative { x: 1.0 }.is_domain());
    }
}
