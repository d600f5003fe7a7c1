//! Newton-Raphson goal seek.

use tracing::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{central_difference, GoalSeek, Objective, SolveMethod, SolverResult};

/// Overshoot applied to each Newton step so a double root is crossed
/// instead of approached from one side.
const NEWTON_OVERSHOOT: f64 = 1.000001;

impl GoalSeek {
    /// Newton-Raphson goal seek from `x0`.
    ///
    /// Each iteration:
    ///
    /// 1. fails `OutOfBounds` if `x` left the search interval;
    /// 2. evaluates `y = f(x)` and records it in the bracket, stopping on
    ///    an exact zero;
    /// 3. takes the slope from `df`, or from [`central_difference`] when
    ///    `df` is `None`, failing `FlatDerivative` on a zero slope;
    /// 4. steps to `x1 = x - 1.000001 * y / slope` and converges once the
    ///    relative step `|x1 - x| / (|x| + |x1|)` is below half the tolerance.
    ///
    /// Every evaluation of `f` at an iterate spends one iteration of the
    /// shared budget, and the reported count is the total spent on this
    /// `GoalSeek`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds`, `FlatDerivative`, `DegenerateStep`, any objective
    /// error, or `ConvergenceFailed` once `max_iterations` are spent.
    pub fn newton<F, D>(&mut self, f: &F, df: Option<&D>, x0: f64) -> MathResult<SolverResult>
    where
        F: Objective + ?Sized,
        D: Objective + ?Sized,
    {
        let precision = self.config.tolerance;
        let mut x = x0;
        let mut residual = f64::NAN;

        while self.budget_left() {
            self.check_bounds(x)?;

            self.iterations += 1;
            let iteration = self.iterations;
            let y = f.evaluate(x)?;
            residual = y;

            if self.bracket.update(x, y) {
                debug!(root = x, iterations = iteration, "goal seek hit exact root");
                return Ok(SolverResult {
                    root: x,
                    iterations: iteration,
                    residual: y,
                    method: SolveMethod::Newton,
                });
            }

            let slope = match df {
                Some(df) => df.evaluate(x)?,
                None => central_difference(f, x, &self.bracket, &self.bounds, precision)?,
            };

            if slope == 0.0 {
                return Err(MathError::FlatDerivative { x });
            }

            let x1 = x - NEWTON_OVERSHOOT * y / slope;
            let stepsize = (x1 - x).abs() / (x.abs() + x1.abs());
            trace!(iteration, x, y, slope, x1, stepsize, "newton step");

            x = x1;
            if stepsize < precision / 2.0 {
                self.bracket.set_root(x);
                debug!(root = x, iterations = iteration, "goal seek converged");
                return Ok(SolverResult {
                    root: x,
                    iterations: iteration,
                    residual: y,
                    method: SolveMethod::Newton,
                });
            }
        }

        debug!(
            iterations = self.config.max_iterations,
            last = x,
            "goal seek exhausted iterations"
        );
        Err(MathError::convergence_failed(
            self.config.max_iterations,
            residual.abs(),
        ))
    }

    /// Newton goal seek with a finite-difference derivative.
    pub fn newton_numerical<F>(&mut self, f: &F, x0: f64) -> MathResult<SolverResult>
    where
        F: Objective,
    {
        self.newton::<F, F>(f, None, x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{SolverBounds, SolverConfig};
    use approx::assert_relative_eq;
    use std::cell::Cell;

    fn seek() -> GoalSeek {
        GoalSeek::new(SolverBounds::default(), SolverConfig::default())
    }

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x - 2.0) };
        let df = |x: f64| -> MathResult<f64> { Ok(2.0 * x) };

        let mut seek = seek();
        let result = seek.newton(&f, Some(&df), 1.5).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10);
        assert_eq!(result.method, SolveMethod::Newton);
        assert_eq!(seek.bracket().root(), Some(result.root));
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x * x - 27.0) };
        let df = |x: f64| -> MathResult<f64> { Ok(3.0 * x * x) };

        let result = seek().newton(&f, Some(&df), 2.0).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x - 2.0) };

        let result = seek().newton_numerical(&f, 1.5).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_exact_root_stops_immediately() {
        let f = |x: f64| -> MathResult<f64> { Ok(x - 1.5) };

        let result = seek().newton_numerical(&f, 1.5).unwrap();

        assert_eq!(result.root, 1.5);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_flat_derivative() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x * x - 1.0) };
        let df = |x: f64| -> MathResult<f64> { Ok(3.0 * x * x) };

        let err = seek().newton(&f, Some(&df), 0.0).unwrap_err();

        assert_eq!(err, MathError::FlatDerivative { x: 0.0 });
    }

    #[test]
    fn test_flat_numerical_derivative() {
        let f = |_: f64| -> MathResult<f64> { Ok(5.0) };

        let err = seek().newton_numerical(&f, 1.0).unwrap_err();

        assert_eq!(err, MathError::FlatDerivative { x: 1.0 });
    }

    #[test]
    fn test_out_of_bounds_start() {
        let f = |x: f64| -> MathResult<f64> { Ok(x) };
        let mut seek = GoalSeek::new(
            SolverBounds::new(-1.0, 1000.0).unwrap(),
            SolverConfig::default(),
        );

        let err = seek.newton_numerical(&f, 2000.0).unwrap_err();

        assert!(matches!(err, MathError::OutOfBounds { x, .. } if x == 2000.0));
    }

    #[test]
    fn test_iterate_leaves_bounds() {
        let f = |x: f64| -> MathResult<f64> { Ok(x - 2000.0) };
        let mut seek = GoalSeek::new(
            SolverBounds::new(-1.0, 1000.0).unwrap(),
            SolverConfig::default(),
        );

        let err = seek.newton_numerical(&f, 1.1).unwrap_err();

        assert!(matches!(err, MathError::OutOfBounds { x, .. } if x > 1000.0));
    }

    #[test]
    fn test_objective_error_propagates() {
        let f = |_: f64| -> MathResult<f64> { Err(MathError::domain("negative day offset")) };

        let err = seek().newton_numerical(&f, 1.1).unwrap_err();

        assert!(err.is_domain());
    }

    #[test]
    fn test_no_root_terminates_at_iteration_cap() {
        // x^2 + 1 never crosses zero; Newton wanders chaotically
        let evaluations = Cell::new(0u32);
        let f = |x: f64| -> MathResult<f64> {
            evaluations.set(evaluations.get() + 1);
            Ok(x * x + 1.0)
        };
        let df = |x: f64| -> MathResult<f64> { Ok(2.0 * x) };

        let err = seek().newton(&f, Some(&df), 1.1).unwrap_err();

        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 100, .. }));
        assert_eq!(evaluations.get(), 100);
    }

    #[test]
    fn test_custom_iteration_cap() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x + 1.0) };
        let df = |x: f64| -> MathResult<f64> { Ok(2.0 * x) };
        let config = SolverConfig::default().with_max_iterations(5);

        let err = GoalSeek::new(SolverBounds::default(), config)
            .newton(&f, Some(&df), 1.1)
            .unwrap_err();

        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 5, .. }));
    }

    #[test]
    fn test_spent_budget_stops_before_evaluating() {
        let evaluations = Cell::new(0u32);
        let f = |x: f64| -> MathResult<f64> {
            evaluations.set(evaluations.get() + 1);
            Ok(x * x + 1.0)
        };
        let df = |x: f64| -> MathResult<f64> { Ok(2.0 * x) };
        let mut seek = GoalSeek::new(
            SolverBounds::default(),
            SolverConfig::default().with_max_iterations(5),
        );

        seek.newton(&f, Some(&df), 1.1).unwrap_err();
        let err = seek.newton(&f, Some(&df), 1.1).unwrap_err();

        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 5, .. }));
        assert_eq!(evaluations.get(), 5);
        assert_eq!(seek.iterations_used(), 5);
    }

    #[test]
    fn test_bracket_tracks_iterates() {
        let f = |x: f64| -> MathResult<f64> { Ok(x * x - 2.0) };
        let mut seek = seek();

        seek.newton_numerical(&f, 0.5).unwrap();

        let neg = seek.bracket().negative().unwrap();
        assert_eq!(neg.x, 0.5);
        assert!(seek.bracket().positive().is_some());
    }
}
