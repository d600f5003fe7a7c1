//! XIRR calculation.
//!
//! The XIRR is the growth factor `rate` at which the NPV of a series of
//! dated cash flows is zero. It is found by Newton goal seek over
//! [`NpvObjective`] from an initial guess of 1.1, with a finite-difference
//! derivative, inside `[-1, 1000]`.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use xirr_core::{CashFlowSeries, Date};
use xirr_math::solvers::{GoalSeek, SolveMethod, SolverBounds};

use crate::config::XirrConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::npv::NpvObjective;

/// Lowest growth factor searched. A rate below -100% has no meaning.
const MIN_GROWTH_FACTOR: f64 = -1.0;

/// Decimal places of the reported percentage.
const PERCENTAGE_DP: u32 = 2;

/// A solved XIRR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XirrResult {
    /// Growth factor `1 + annual rate` that zeroes the NPV.
    pub rate: f64,
    /// Annual rate as a fraction (`rate - 1`).
    pub annual_rate: f64,
    /// Annual rate in percent, rounded half away from zero to 2 places.
    pub percentage: Decimal,
    /// Iterations spent across all solver stages.
    pub iterations: u32,
    /// Stage that found the root.
    pub method: SolveMethod,
}

/// XIRR calculator.
///
/// Holds only settings. Each call builds its own goal-seek state, so one
/// calculator can serve any number of calculations.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use xirr_analytics::XirrCalculator;
/// use xirr_core::Date;
///
/// let dates = [
///     Date::from_ymd(2008, 1, 1).unwrap(),
///     Date::from_ymd(2008, 3, 1).unwrap(),
///     Date::from_ymd(2008, 10, 30).unwrap(),
///     Date::from_ymd(2009, 2, 15).unwrap(),
///     Date::from_ymd(2009, 4, 1).unwrap(),
/// ];
/// let amounts = [-10000.0, 2750.0, 4250.0, 3250.0, 2750.0];
///
/// let xirr = XirrCalculator::new().calculate_from(&dates, &amounts);
/// assert_eq!(xirr, Some(dec!(37.34)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XirrCalculator {
    config: XirrConfig,
}

impl XirrCalculator {
    /// Creates a calculator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with the given settings.
    #[must_use]
    pub fn with_config(config: XirrConfig) -> Self {
        Self { config }
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &XirrConfig {
        &self.config
    }

    /// Returns the XIRR in percent, or `None` if there is no result.
    ///
    /// `None` covers invalid input and every solver failure alike; use
    /// [`try_calculate`](Self::try_calculate) for the reason.
    #[must_use]
    pub fn calculate(&self, series: &CashFlowSeries) -> Option<Decimal> {
        match self.try_calculate(series) {
            Ok(result) => Some(result.percentage),
            Err(err) => {
                debug!(error = %err, "xirr has no result");
                None
            }
        }
    }

    /// Computes the XIRR from parallel date and amount lists.
    #[must_use]
    pub fn calculate_from(&self, dates: &[Date], amounts: &[f64]) -> Option<Decimal> {
        match self.try_calculate_from(dates, amounts) {
            Ok(result) => Some(result.percentage),
            Err(err) => {
                debug!(error = %err, "xirr has no result");
                None
            }
        }
    }

    /// Computes the XIRR from parallel date and amount lists.
    ///
    /// # Errors
    ///
    /// `AnalyticsError::Core` wrapping `CoreError::LengthMismatch` if the
    /// lists differ in length, else as [`try_calculate`](Self::try_calculate).
    pub fn try_calculate_from(
        &self,
        dates: &[Date],
        amounts: &[f64],
    ) -> AnalyticsResult<XirrResult> {
        let series = CashFlowSeries::from_parallel(dates, amounts)?;
        self.try_calculate(&series)
    }

    /// Computes the XIRR of `series`.
    ///
    /// Input is validated before any solver work: the series must be
    /// non-empty and contain both a positive and a negative amount.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::InvalidConfig` for unusable settings
    /// - `AnalyticsError::EmptySeries` / `AnalyticsError::NoSignChange`
    /// - `AnalyticsError::Solver` if the goal seek fails
    pub fn try_calculate(&self, series: &CashFlowSeries) -> AnalyticsResult<XirrResult> {
        self.config.validate()?;

        if series.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }
        if !series.has_sign_change() {
            return Err(AnalyticsError::NoSignChange);
        }

        let bounds = SolverBounds::default()
            .clamp_min(MIN_GROWTH_FACTOR)
            .clamp_max(self.config.upper_bound);
        let objective = NpvObjective::new(series).with_day_count(self.config.day_count);
        let mut seek = GoalSeek::new(bounds, self.config.solver_config());

        debug!(
            flows = series.len(),
            guess = self.config.initial_guess,
            xmin = bounds.xmin,
            xmax = bounds.xmax,
            "solving xirr"
        );

        let solved = if self.config.bracket_fallback {
            seek.hybrid_numerical(&objective, self.config.initial_guess)?
        } else {
            seek.newton_numerical(&objective, self.config.initial_guess)?
        };

        let result = Self::to_result(solved.root, solved.iterations, solved.method)?;
        debug!(
            rate = result.rate,
            percentage = %result.percentage,
            iterations = result.iterations,
            method = %result.method,
            "xirr solved"
        );
        Ok(result)
    }

    fn to_result(rate: f64, iterations: u32, method: SolveMethod) -> AnalyticsResult<XirrResult> {
        let annual_rate = rate - 1.0;
        let percentage = Decimal::from_f64_retain(annual_rate * 100.0)
            .ok_or(AnalyticsError::NonFiniteRate { rate })?
            .round_dp_with_strategy(PERCENTAGE_DP, RoundingStrategy::MidpointAwayFromZero);

        Ok(XirrResult {
            rate,
            annual_rate,
            percentage,
            iterations,
            method,
        })
    }
}
