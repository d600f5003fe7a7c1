//! Day count conventions.
//!
//! A day count convention turns the gap between two dates into the year
//! fraction used as a discount exponent.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed, the XIRR reference convention
//! - [`Act360`]: Actual/360, money market convention
//!
//! # Usage
//!
//! ```rust
//! use xirr_core::daycounts::{Act365Fixed, DayCount};
//! use xirr_core::types::Date;
//!
//! let start = Date::from_ymd(2008, 1, 1).unwrap();
//! let end = Date::from_ymd(2008, 12, 31).unwrap();
//!
//! assert_eq!(Act365Fixed.day_count(start, end), 365);
//! assert_eq!(Act365Fixed.year_fraction(start, end), 1.0);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/365F").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the signed day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Runtime selection of a day count convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    #[serde(rename = "ACT/365F", alias = "Act365Fixed")]
    Act365Fixed,

    /// Actual/360
    #[serde(rename = "ACT/360", alias = "Act360")]
    Act360,
}

impl DayCountConvention {
    /// Returns the day count implementation for this convention.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::Act360 => &Act360,
        }
    }

    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Returns all available conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::Act365Fixed, DayCountConvention::Act360]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    /// Accepts "ACT/365F", "ACT/365", "ACT/365 FIXED", "ACT/360" and the
    /// enum-style names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACT/365F" | "ACT/365" | "ACT/365 FIXED" | "ACT365FIXED" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            "ACT/360" | "ACT360" => Ok(DayCountConvention::Act360),
            _ => Err(CoreError::UnknownDayCount {
                name: s.to_string(),
            }),
        }
    }
}
