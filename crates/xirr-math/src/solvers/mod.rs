//! Goal-seek root finding.
//!
//! This module drives a scalar [`Objective`] to zero:
//!
//! - [`GoalSeek::newton`]: Newton-Raphson with a relative step test
//! - [`GoalSeek::bisect`]: bisection between the tracked bracket samples
//! - [`GoalSeek::hybrid`]: Newton first, then a sampling net and bisection
//! - [`central_difference`]: derivative estimate when none is supplied
//! - [`Bracket`]: best positive and negative samples seen so far
//!
//! # Example
//!
//! ```rust
//! use xirr_math::solvers::{GoalSeek, SolverBounds, SolverConfig};
//! use xirr_math::MathResult;
//!
//! let f = |x: f64| -> MathResult<f64> { Ok(x * x - 2.0) };
//!
//! let mut seek = GoalSeek::new(SolverBounds::default(), SolverConfig::default());
//! let result = seek.newton_numerical(&f, 1.5).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod bisection;
mod bracket;
mod derivative;
mod goal_seek;
mod hybrid;
mod newton;

pub use bracket::{Bracket, Sample};
pub use derivative::central_difference;
pub use goal_seek::GoalSeek;

use std::fmt;

use crate::error::{MathError, MathResult};

/// Default relative step tolerance for goal seeking.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for goal seeking.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default lower bound of the search interval.
pub const DEFAULT_XMIN: f64 = -1e10;

/// Default upper bound of the search interval.
pub const DEFAULT_XMAX: f64 = 1e10;

/// A scalar function to drive to zero.
///
/// Implemented for any `Fn(f64) -> MathResult<f64>` closure, so callers can
/// pass either a closure or a dedicated type.
pub trait Objective {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> MathResult<f64>;
}

impl<F> Objective for F
where
    F: Fn(f64) -> MathResult<f64>,
{
    fn evaluate(&self, x: f64) -> MathResult<f64> {
        self(x)
    }
}

/// Configuration for goal seeking.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Relative precision. Newton stops once the relative step falls below
    /// half of it, bisection once the relative bracket width falls below it.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Closed search interval `[xmin, xmax]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverBounds {
    /// Lower bound.
    pub xmin: f64,
    /// Upper bound.
    pub xmax: f64,
}

impl Default for SolverBounds {
    fn default() -> Self {
        Self {
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
        }
    }
}

impl SolverBounds {
    /// Creates a search interval.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` unless `xmin < xmax` and both are finite.
    pub fn new(xmin: f64, xmax: f64) -> MathResult<Self> {
        if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
            return Err(MathError::invalid_input(format!(
                "bounds must satisfy xmin < xmax, got [{xmin}, {xmax}]"
            )));
        }
        Ok(Self { xmin, xmax })
    }

    /// Raises the lower bound to at least `floor`.
    #[must_use]
    pub fn clamp_min(mut self, floor: f64) -> Self {
        self.xmin = self.xmin.max(floor);
        self
    }

    /// Lowers the upper bound to at most `ceiling`.
    #[must_use]
    pub fn clamp_max(mut self, ceiling: f64) -> Self {
        self.xmax = self.xmax.min(ceiling);
        self
    }

    /// Returns true if `xmin <= x <= xmax`. NaN is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.xmin && x <= self.xmax
    }

    /// Returns `xmax - xmin`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }
}

/// How a root was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// Newton-Raphson goal seek.
    Newton,
    /// Bisection on a sampled bracket.
    Bisection,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Newton => write!(f, "Newton"),
            SolveMethod::Bisection => write!(f, "Bisection"),
        }
    }
}

/// Result of a successful goal seek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Objective value at the last evaluated point.
    pub residual: f64,
    /// Method that produced the root.
    pub method: SolveMethod,
}
