//! XIRR calculator settings.

use serde::{Deserialize, Serialize};
use xirr_core::daycounts::DayCountConvention;
use xirr_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Settings for one XIRR calculation.
///
/// Every field has a default, so a partial TOML or JSON document only
/// overrides what it names. The defaults reproduce the reference behaviour:
/// start from a growth factor of 1.1, search `[-1, 1000]`, stop when the
/// relative Newton step falls below `precision / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XirrConfig {
    /// Starting growth factor (`1 + annual rate`).
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Iteration cap shared by Newton, the fallback net and bisection.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Relative precision of the solved growth factor.
    #[serde(default = "default_precision")]
    pub precision: f64,

    /// Largest growth factor searched.
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,

    /// Year fraction used in the discount exponent.
    #[serde(default)]
    pub day_count: DayCountConvention,

    /// Search for a sign change and bisect when Newton fails.
    #[serde(default = "default_true")]
    pub bracket_fallback: bool,
}

fn default_initial_guess() -> f64 {
    1.1
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_precision() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_upper_bound() -> f64 {
    1000.0
}

fn default_true() -> bool {
    true
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            initial_guess: default_initial_guess(),
            max_iterations: default_max_iterations(),
            precision: default_precision(),
            upper_bound: default_upper_bound(),
            day_count: DayCountConvention::default(),
            bracket_fallback: default_true(),
        }
    }
}

impl XirrConfig {
    /// Sets the starting growth factor.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the precision.
    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the largest growth factor searched.
    #[must_use]
    pub fn with_upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Enables or disables the bisection fallback.
    #[must_use]
    pub fn with_bracket_fallback(mut self, enabled: bool) -> Self {
        self.bracket_fallback = enabled;
        self
    }

    /// Returns the goal-seek configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.precision, self.max_iterations)
    }

    /// Checks that the settings describe a usable search.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(AnalyticsError::invalid_config(format!(
                "precision must be positive, got {}",
                self.precision
            )));
        }
        if self.max_iterations == 0 {
            return Err(AnalyticsError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        if !(self.upper_bound.is_finite() && self.upper_bound > -1.0) {
            return Err(AnalyticsError::invalid_config(format!(
                "upper_bound must be finite and above -1, got {}",
                self.upper_bound
            )));
        }
        if !(self.initial_guess >= -1.0 && self.initial_guess <= self.upper_bound) {
            return Err(AnalyticsError::invalid_config(format!(
                "initial_guess {} is outside [-1, {}]",
                self.initial_guess, self.upper_bound
            )));
        }
        Ok(())
    }
}
