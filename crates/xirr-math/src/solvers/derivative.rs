//! Finite-difference derivative estimation.

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, Objective, SolverBounds};

/// Ratio between the sizing length and the difference step.
const STEP_DIVISOR: f64 = 1e6;

/// Estimates `f'(x)` with a symmetric difference quotient.
///
/// The step is `|x| / 1e6`. Near zero (`|x| < precision`) a relative step
/// is meaningless, so the step is sized from the bracket width when both
/// signs are held, or else from the width of the search interval.
///
/// Each point that would leave `bounds` is pulled back onto `x`, giving a
/// one-sided difference at a boundary.
///
/// # Errors
///
/// - `MathError::DegenerateStep` if both points collapse onto `x`
/// - any error raised by the objective at either point
pub fn central_difference<F>(
    f: &F,
    x: f64,
    bracket: &Bracket,
    bounds: &SolverBounds,
    precision: f64,
) -> MathResult<f64>
where
    F: Objective + ?Sized,
{
    let step = if x.abs() < precision {
        bracket.width().unwrap_or_else(|| bounds.width()) / STEP_DIVISOR
    } else {
        x.abs() / STEP_DIVISOR
    };

    let xl = if x - step < bounds.xmin { x } else { x - step };
    let xr = if x + step > bounds.xmax { x } else { x + step };

    if xl == xr {
        return Err(MathError::DegenerateStep { x });
    }

    let yl = f.evaluate(xl)?;
    let yr = f.evaluate(xr)?;

    Ok((yr - yl) / (xr - xl))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    fn square(x: f64) -> MathResult<f64> {
        Ok(x * x)
    }

    #[test]
    fn test_interior_point() {
        let df = central_difference(&square, 3.0, &Bracket::new(), &SolverBounds::default(), 1e-10)
            .unwrap();
        assert_relative_eq!(df, 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_step_near_zero_uses_bounds_width() {
        let points = RefCell::new(Vec::new());
        let f = |x: f64| -> MathResult<f64> {
            points.borrow_mut().push(x);
            Ok(x)
        };
        let bounds = SolverBounds::new(-1.0, 1.0).unwrap();

        let df = central_difference(&f, 0.0, &Bracket::new(), &bounds, 1e-10).unwrap();

        assert_relative_eq!(df, 1.0);
        assert_eq!(*points.borrow(), vec![-2e-6, 2e-6]);
    }

    #[test]
    fn test_step_near_zero_uses_bracket_width() {
        let points = RefCell::new(Vec::new());
        let f = |x: f64| -> MathResult<f64> {
            points.borrow_mut().push(x);
            Ok(x)
        };
        let mut bracket = Bracket::new();
        bracket.update(-0.5, -1.0);
        bracket.update(0.5, 1.0);

        central_difference(&f, 0.0, &bracket, &SolverBounds::default(), 1e-10).unwrap();

        assert_eq!(*points.borrow(), vec![-1e-6, 1e-6]);
    }

    #[test]
    fn test_one_sided_at_upper_bound() {
        let bounds = SolverBounds::new(0.0, 2.0).unwrap();
        let df = central_difference(&square, 2.0, &Bracket::new(), &bounds, 1e-10).unwrap();
        // Backward difference: slightly below the true slope of 4
        assert_relative_eq!(df, 4.0, epsilon = 1e-5);
        assert!(df < 4.0);
    }

    #[test]
    fn test_degenerate_step() {
        let bounds = SolverBounds::new(1.0, 1.0 + 1e-12).unwrap();
        let err = central_difference(&square, 1.0, &Bracket::new(), &bounds, 1e-10).unwrap_err();
        assert_eq!(err, MathError::DegenerateStep { x: 1.0 });
    }

    #[test]
    fn test_objective_error_propagates() {
        let f = |_: f64| -> MathResult<f64> { Err(MathError::domain("undefined")) };
        let err =
            central_difference(&f, 1.0, &Bracket::new(), &SolverBounds::default(), 1e-10)
                .unwrap_err();
        assert!(err.is_domain());
    }
}
