//! # XIRR Math
//!
//! Root finding for the XIRR library.
//!
//! This crate provides a goal-seek engine over any [`solvers::Objective`]:
//!
//! - **Newton goal seek**: damped Newton-Raphson with a relative step test
//! - **Bracket tracking**: best positive and negative samples seen so far
//! - **Finite differences**: symmetric derivative estimate when none is supplied
//! - **Bisection fallback**: refines a bracket when Newton leaves the bounds
//!
//! ## Design Philosophy
//!
//! - **Owned state**: one [`solvers::GoalSeek`] per solve, never shared
//! - **Typed failures**: every way a solve can stop is a [`MathError`] variant

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        central_difference, Bracket, GoalSeek, Objective, Sample, SolveMethod, SolverBounds,
        SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
