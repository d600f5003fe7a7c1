//! Goal-seek state for one solve.

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, Objective, SolverBounds, SolverConfig};

/// Owns the bounds, configuration and bracket of a single solve.
///
/// The bracket accumulates across [`newton`](GoalSeek::newton),
/// [`sample`](GoalSeek::sample) and [`bisect`](GoalSeek::bisect) calls on
/// the same instance and is never reset. The iteration budget
/// `max_iterations` is shared the same way: every Newton step, fallback
/// sample and bisection step draws from it. Use a fresh `GoalSeek` per
/// calculation.
#[derive(Debug, Clone, Default)]
pub struct GoalSeek {
    pub(crate) bounds: SolverBounds,
    pub(crate) config: SolverConfig,
    pub(crate) bracket: Bracket,
    pub(crate) iterations: u32,
}

impl GoalSeek {
    /// Creates a goal seek with an empty bracket.
    #[must_use]
    pub fn new(bounds: SolverBounds, config: SolverConfig) -> Self {
        Self {
            bounds,
            config,
            bracket: Bracket::new(),
            iterations: 0,
        }
    }

    /// Returns the search interval.
    #[must_use]
    pub fn bounds(&self) -> &SolverBounds {
        &self.bounds
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the samples gathered so far.
    #[must_use]
    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    /// Returns the iterations spent so far across all stages.
    #[must_use]
    pub fn iterations_used(&self) -> u32 {
        self.iterations
    }

    /// Evaluates `f` at `x` and records the sample.
    ///
    /// Explicit samples do not draw from the iteration budget.
    ///
    /// Returns true iff `f(x) == 0`.
    ///
    /// # Errors
    ///
    /// - `MathError::OutOfBounds` if `x` is outside the search interval
    /// - any error raised by the objective
    pub fn sample<F>(&mut self, f: &F, x: f64) -> MathResult<bool>
    where
        F: Objective + ?Sized,
    {
        self.check_bounds(x)?;
        let y = f.evaluate(x)?;
        Ok(self.bracket.update(x, y))
    }

    pub(crate) fn budget_left(&self) -> bool {
        self.iterations < self.config.max_iterations
    }

    pub(crate) fn check_bounds(&self, x: f64) -> MathResult<()> {
        if self.bounds.contains(x) {
            Ok(())
        } else {
            Err(MathError::OutOfBounds {
                x,
                xmin: self.bounds.xmin,
                xmax: self.bounds.xmax,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_into_bracket() {
        let f = |x: f64| -> MathResult<f64> { Ok(x - 2.0) };
        let mut seek = GoalSeek::new(SolverBounds::default(), SolverConfig::default());

        assert!(!seek.sample(&f, 1.0).unwrap());
        assert!(!seek.sample(&f, 3.0).unwrap());
        assert!(seek.bracket().is_complete());

        assert!(seek.sample(&f, 2.0).unwrap());
        assert_eq!(seek.bracket().root(), Some(2.0));
        assert_eq!(seek.iterations_used(), 0);
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let f = |x: f64| -> MathResult<f64> { Ok(x) };
        let mut seek = GoalSeek::new(
            SolverBounds::new(-1.0, 1.0).unwrap(),
            SolverConfig::default(),
        );

        let err = seek.sample(&f, 2.0).unwrap_err();
        assert!(matches!(err, MathError::OutOfBounds { x, .. } if x == 2.0));
        assert_eq!(seek.bracket(), &Bracket::new());
    }
}
