//! Cash flow types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// A dated, signed cash flow.
///
/// Negative amounts are outflows (investments), positive amounts are
/// inflows (returns).
///
/// # Example
///
/// ```rust
/// use xirr_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(Date::from_ymd(2008, 1, 1).unwrap(), -10_000.0);
/// assert!(cf.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Signed amount
    amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns true if money is received (`amount > 0`).
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if money is paid out (`amount < 0`).
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}

/// An ordered series of cash flows.
///
/// The series is not sorted implicitly. The first element is the reference
/// date for discounting, even when a later element is chronologically
/// earlier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSeries {
    /// Creates a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Builds a series from parallel date and amount lists.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` if the lists differ in length.
    pub fn from_parallel(dates: &[Date], amounts: &[f64]) -> CoreResult<Self> {
        if dates.len() != amounts.len() {
            return Err(CoreError::LengthMismatch {
                dates: dates.len(),
                amounts: amounts.len(),
            });
        }

        Ok(dates
            .iter()
            .zip(amounts)
            .map(|(&date, &amount)| CashFlow::new(date, amount))
            .collect())
    }

    /// Appends a cash flow.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Removes all cash flows.
    pub fn clear(&mut self) {
        self.cash_flows.clear();
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the first cash flow in list order.
    #[must_use]
    pub fn first(&self) -> Option<&CashFlow> {
        self.cash_flows.first()
    }

    /// Returns the discounting reference date: the date of element 0.
    #[must_use]
    pub fn reference_date(&self) -> Option<Date> {
        self.first().map(CashFlow::date)
    }

    /// Returns true if any amount is strictly positive.
    #[must_use]
    pub fn has_inflow(&self) -> bool {
        self.cash_flows.iter().any(CashFlow::is_inflow)
    }

    /// Returns true if any amount is strictly negative.
    #[must_use]
    pub fn has_outflow(&self) -> bool {
        self.cash_flows.iter().any(CashFlow::is_outflow)
    }

    /// Returns true if the series holds both an inflow and an outflow.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.has_inflow() && self.has_outflow()
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(CashFlow::amount).sum()
    }

    /// Sorts cash flows by date (stable).
    pub fn sort_by_date(&mut self) {
        self.cash_flows.sort_by_key(CashFlow::date);
    }
}

impl IntoIterator for CashFlowSeries {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

impl Extend<CashFlow> for CashFlowSeries {
    fn extend<I: IntoIterator<Item = CashFlow>>(&mut self, iter: I) {
        self.cash_flows.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_cashflow_sign() {
        let cf = CashFlow::new(date("2025-06-15"), 2.5);
        assert!(cf.is_inflow());
        assert!(!cf.is_outflow());

        let zero = CashFlow::new(date("2025-06-15"), 0.0);
        assert!(!zero.is_inflow());
        assert!(!zero.is_outflow());
    }

    #[test]
    fn test_from_parallel() {
        let dates = [date("2008-01-01"), date("2008-03-01")];
        let series = CashFlowSeries::from_parallel(&dates, &[-100.0, 110.0]).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.reference_date(), Some(date("2008-01-01")));
        assert_relative_eq!(series.total(), 10.0);
        assert!(series.has_sign_change());
    }

    #[test]
    fn test_from_parallel_length_mismatch() {
        let dates = [date("2008-01-01")];
        let err = CashFlowSeries::from_parallel(&dates, &[-100.0, 110.0]).unwrap_err();
        assert_eq!(
            err,
            CoreError::LengthMismatch {
                dates: 1,
                amounts: 2
            }
        );
    }

    #[test]
    fn test_reference_date_is_list_order() {
        let series: CashFlowSeries = vec![
            CashFlow::new(date("2009-01-01"), 110.0),
            CashFlow::new(date("2008-01-01"), -100.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(series.reference_date(), Some(date("2009-01-01")));

        let mut sorted = series.clone();
        sorted.sort_by_date();
        assert_eq!(sorted.reference_date(), Some(date("2008-01-01")));
    }

    #[test]
    fn test_sign_change_requires_both_sides() {
        let mut series = CashFlowSeries::new();
        assert!(series.is_empty());
        assert!(!series.has_sign_change());

        series.push(CashFlow::new(date("2008-01-01"), 100.0));
        series.push(CashFlow::new(date("2008-06-01"), 0.0));
        assert!(series.has_inflow());
        assert!(!series.has_outflow());
        assert!(!series.has_sign_change());

        series.push(CashFlow::new(date("2009-01-01"), -5.0));
        assert!(series.has_sign_change());

        series.clear();
        assert!(series.is_empty());
    }
}
