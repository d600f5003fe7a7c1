//! Newton goal seek with a bracketing fallback.

use tracing::{debug, warn};

use crate::error::MathResult;
use crate::solvers::{GoalSeek, Objective, SolveMethod, SolverResult};

/// The sampling net stops widening once the factor reaches this value.
const NET_MAX_FACTOR: f64 = 100.0;

impl GoalSeek {
    /// Newton goal seek from `x0`, falling back to bisection.
    ///
    /// If Newton fails for any reason other than a domain error, a net of
    /// points `x0 * k` and `x0 / k` for `k = 2, 4, 8, ...` (while `k < 100`)
    /// is sampled until the bracket holds both signs, then the bracket is
    /// bisected. Points outside the bounds are skipped.
    ///
    /// All three stages share one `max_iterations` budget. Each net sample
    /// spends one iteration, and the reported count is the total.
    ///
    /// # Errors
    ///
    /// Domain errors are returned as-is. If the net cannot complete the
    /// bracket, the original Newton failure is returned. Otherwise any
    /// [`bisect`](GoalSeek::bisect) error.
    pub fn hybrid<F, D>(&mut self, f: &F, df: Option<&D>, x0: f64) -> MathResult<SolverResult>
    where
        F: Objective + ?Sized,
        D: Objective + ?Sized,
    {
        let newton_err = match self.newton(f, df, x0) {
            Ok(result) => return Ok(result),
            Err(err) if err.is_domain() => return Err(err),
            Err(err) => err,
        };

        warn!(error = %newton_err, x0, "newton goal seek failed, sampling for a bracket");

        if let Some(root) = self.lay_net(f, x0)? {
            return Ok(SolverResult {
                root,
                iterations: self.iterations,
                residual: 0.0,
                method: SolveMethod::Bisection,
            });
        }

        if !self.bracket.is_complete() {
            debug!("no sign change found around the initial guess");
            return Err(newton_err);
        }

        self.bisect(f)
    }

    /// [`hybrid`](GoalSeek::hybrid) with a finite-difference derivative.
    pub fn hybrid_numerical<F>(&mut self, f: &F, x0: f64) -> MathResult<SolverResult>
    where
        F: Objective,
    {
        self.hybrid::<F, F>(f, None, x0)
    }

    /// Samples around `x0` until both signs are held or the budget runs
    /// out. Returns an exact root if a sample hits one.
    fn lay_net<F>(&mut self, f: &F, x0: f64) -> MathResult<Option<f64>>
    where
        F: Objective + ?Sized,
    {
        let mut factor = 2.0;
        while !self.bracket.is_complete() && factor < NET_MAX_FACTOR {
            for x in [x0 * factor, x0 / factor] {
                if !self.bounds.contains(x) {
                    continue;
                }
                if !self.budget_left() {
                    return Ok(None);
                }
                self.iterations += 1;
                if self.sample(f, x)? {
                    return Ok(Some(x));
                }
            }
            factor *= 2.0;
        }
        Ok(None)
    }
}
