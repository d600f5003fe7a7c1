//! # XIRR Analytics
//!
//! Extended internal rate of return for irregularly dated cash flows.
//!
//! This crate ties the core types to the goal-seek engine:
//!
//! - **NPV**: [`NpvObjective`] discounts a series to its first flow's date
//! - **XIRR**: [`XirrCalculator`] validates input, solves and rounds
//! - **Collection**: [`CashFlowCollector`] builds a series one flow at a time
//! - **Configuration**: [`XirrConfig`] with serde defaults
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use xirr_analytics::prelude::*;
//!
//! let mut collector = CashFlowCollector::new();
//! collector.add_cash_flow(Date::from_ymd(2020, 1, 1).ok(), Some(-1000.0));
//! collector.add_cash_flow(Date::from_ymd(2020, 12, 31).ok(), Some(1000.0));
//!
//! assert_eq!(collector.xirr(), Some(Decimal::ZERO));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod collector;
pub mod config;
pub mod error;
pub mod npv;
pub mod xirr;

pub use collector::CashFlowCollector;
pub use config::XirrConfig;
pub use error::{AnalyticsError, AnalyticsResult};
pub use npv::NpvObjective;
pub use xirr::{XirrCalculator, XirrResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::collector::CashFlowCollector;
    pub use crate::config::XirrConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::npv::NpvObjective;
    pub use crate::xirr::{XirrCalculator, XirrResult};

    pub use xirr_core::daycounts::DayCountConvention;
    pub use xirr_core::{CashFlow, CashFlowSeries, Date};
    pub use xirr_math::solvers::SolveMethod;
}
