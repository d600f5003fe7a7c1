//! Domain types for cash flow analytics.
//!
//! - [`Date`]: Calendar date
//! - [`CashFlow`]: Dated signed amount
//! - [`CashFlowSeries`]: Ordered list of cash flows

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowSeries};
pub use date::Date;
