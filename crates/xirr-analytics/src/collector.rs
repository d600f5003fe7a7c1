//! Incremental cash flow collection.

use rust_decimal::Decimal;
use tracing::debug;

use xirr_core::{CashFlow, CashFlowSeries, Date};

use crate::config::XirrConfig;
use crate::xirr::XirrCalculator;

/// Accumulates cash flows one at a time and computes their XIRR.
///
/// Flows keep insertion order; the first one added is the discounting
/// reference date.
#[derive(Debug, Clone, Default)]
pub struct CashFlowCollector {
    series: CashFlowSeries,
    calculator: XirrCalculator,
}

impl CashFlowCollector {
    /// Creates an empty collector with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collector with the given settings.
    #[must_use]
    pub fn with_config(config: XirrConfig) -> Self {
        Self {
            series: CashFlowSeries::new(),
            calculator: XirrCalculator::with_config(config),
        }
    }

    /// Appends a flow. Does nothing unless both values are present.
    pub fn add_cash_flow(&mut self, date: Option<Date>, amount: Option<f64>) {
        if let (Some(date), Some(amount)) = (date, amount) {
            self.series.push(CashFlow::new(date, amount));
        }
    }

    /// Replaces the collected flows with the parallel lists and computes
    /// their XIRR.
    ///
    /// Lists of different lengths leave the collector empty and give `None`.
    pub fn calculate(&mut self, dates: &[Date], amounts: &[f64]) -> Option<Decimal> {
        self.series = match CashFlowSeries::from_parallel(dates, amounts) {
            Ok(series) => series,
            Err(err) => {
                debug!(error = %err, "mismatched cash flow lists");
                self.series.clear();
                return None;
            }
        };
        self.xirr()
    }

    /// Computes the XIRR of the collected flows in percent.
    #[must_use]
    pub fn xirr(&self) -> Option<Decimal> {
        self.calculator.calculate(&self.series)
    }

    /// Returns the collected flows.
    #[must_use]
    pub fn series(&self) -> &CashFlowSeries {
        &self.series
    }

    /// Removes all collected flows.
    pub fn clear(&mut self) {
        self.series.clear();
    }
}
