//! Bisection on the tracked bracket.

use tracing::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{GoalSeek, Objective, SolveMethod, SolverResult};

impl GoalSeek {
    /// Bisects between the bracket's positive and negative samples.
    ///
    /// Every midpoint is fed through the bracket, so the held pair always
    /// straddles the sign change. Converges on an exact zero or once the
    /// relative width `|xpos - xneg| / (|xpos| + |xneg|)` drops below the
    /// tolerance and `|f(mid)|` is no larger than the residuals of the
    /// starting pair. Each midpoint spends one iteration of the shared budget.
    ///
    /// # Errors
    ///
    /// - `MathError::IncompleteBracket` if a side has no sample yet
    /// - `MathError::Domain` if the objective is not finite at a midpoint
    /// - `MathError::Discontinuity` if the bracket closes on a sign change
    ///   whose residual grew instead of shrinking
    /// - `MathError::ConvergenceFailed` once `max_iterations` are spent
    pub fn bisect<F>(&mut self, f: &F) -> MathResult<SolverResult>
    where
        F: Objective + ?Sized,
    {
        let (Some(mut pos), Some(mut neg)) = (self.bracket.positive(), self.bracket.negative())
        else {
            return Err(MathError::IncompleteBracket {
                has_positive: self.bracket.positive().is_some(),
                has_negative: self.bracket.negative().is_some(),
            });
        };

        let start_residual = pos.y.abs().max(neg.y.abs());
        let mut residual = pos.y.abs().min(neg.y.abs());

        while self.budget_left() {
            self.iterations += 1;
            let mid = (pos.x + neg.x) / 2.0;
            let y = f.evaluate(mid)?;

            if !y.is_finite() {
                return Err(MathError::domain(format!("objective is not finite at {mid}")));
            }
            residual = y;

            if self.bracket.update(mid, y) {
                debug!(root = mid, iterations = self.iterations, "bisection hit exact root");
                return Ok(SolverResult {
                    root: mid,
                    iterations: self.iterations,
                    residual: y,
                    method: SolveMethod::Bisection,
                });
            }

            // A midpoint is always strictly closer to the opposite side, so
            // the bracket has just replaced one of its samples.
            if let (Some(p), Some(n)) = (self.bracket.positive(), self.bracket.negative()) {
                pos = p;
                neg = n;
            }

            let width = (pos.x - neg.x).abs() / (pos.x.abs() + neg.x.abs());
            if width < self.config.tolerance {
                if y.abs() > start_residual {
                    debug!(x = mid, residual = y, "bracket closed on a discontinuity");
                    return Err(MathError::Discontinuity { x: mid, residual: y });
                }
                self.bracket.set_root(mid);
                debug!(root = mid, iterations = self.iterations, "bisection converged");
                return Ok(SolverResult {
                    root: mid,
                    iterations: self.iterations,
                    residual: y,
                    method: SolveMethod::Bisection,
                });
            }
        }

        Err(MathError::convergence_failed(
            self.config.max_iterations,
            residual.abs(),
        ))
    }
}
