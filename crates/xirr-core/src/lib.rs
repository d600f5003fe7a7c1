//! # XIRR Core
//!
//! Core types for the XIRR library.
//!
//! This crate provides the data the solver reads but never mutates:
//!
//! - **Types**: `Date`, `CashFlow` and the ordered `CashFlowSeries`
//! - **Day Count Conventions**: Year fractions used to annualise discount exponents
//!
//! ## Example
//!
//! ```rust
//! use xirr_core::prelude::*;
//!
//! let mut series = CashFlowSeries::new();
//! series.push(CashFlow::new(Date::from_ymd(2024, 1, 1).unwrap(), -1000.0));
//! series.push(CashFlow::new(Date::from_ymd(2024, 12, 31).unwrap(), 1100.0));
//! assert!(series.has_sign_change());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSeries, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSeries, Date};
