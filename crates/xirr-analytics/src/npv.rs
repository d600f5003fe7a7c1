//! Net present value of a cash flow series.

use xirr_core::daycounts::DayCountConvention;
use xirr_core::CashFlowSeries;
use xirr_math::solvers::Objective;
use xirr_math::{MathError, MathResult};

/// NPV of a borrowed series as a function of the growth factor.
///
/// Every flow is discounted to the date of the **first element** of the
/// series, which is not necessarily the earliest date:
///
/// ```text
/// npv(rate) = sum(amount_i / rate ^ yf(d_0, d_i))
/// ```
///
/// where `rate = 1 + annual rate` and `yf` is the day-count year fraction
/// (`days / 365` by default). A flow dated before the first element is a
/// domain error.
#[derive(Debug, Clone, Copy)]
pub struct NpvObjective<'a> {
    series: &'a CashFlowSeries,
    day_count: DayCountConvention,
}

impl<'a> NpvObjective<'a> {
    /// Creates an objective over `series` using ACT/365F.
    #[must_use]
    pub fn new(series: &'a CashFlowSeries) -> Self {
        Self {
            series,
            day_count: DayCountConvention::default(),
        }
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns the series being discounted.
    #[must_use]
    pub fn series(&self) -> &'a CashFlowSeries {
        self.series
    }

    /// Computes the NPV at growth factor `rate`. An empty series is worth zero.
    ///
    /// # Errors
    ///
    /// Returns `MathError::Domain` if a flow precedes the reference date.
    pub fn npv(&self, rate: f64) -> MathResult<f64> {
        let Some(reference) = self.series.reference_date() else {
            return Ok(0.0);
        };
        let dc = self.day_count.to_day_count();

        let mut sum = 0.0;
        for cf in self.series {
            if dc.day_count(reference, cf.date()) < 0 {
                return Err(MathError::domain(format!(
                    "cash flow on {} precedes reference date {}",
                    cf.date(),
                    reference
                )));
            }
            let t = dc.year_fraction(reference, cf.date());
            sum += cf.amount() / rate.powf(t);
        }
        Ok(sum)
    }
}

impl Objective for NpvObjective<'_> {
    fn evaluate(&self, x: f64) -> MathResult<f64> {
        self.npv(x)
    }
}
