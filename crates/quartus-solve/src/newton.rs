//! Iterative refinement of a single root.

use crate::error::{Result, SolveError};

/// Polishes an initial guess into a root of `f`.
///
/// The iterative solver is generic over this trait so callers can swap in
/// a different method or different stopping rules.
pub trait RootRefiner {
    /// Refines `guess` into a root of `f`, given its derivative `df`.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is reached from `guess`.
    fn refine(&self, f: &dyn Fn(f64) -> f64, df: &dyn Fn(f64) -> f64, guess: f64) -> Result<f64>;
}

/// Newton–Raphson iteration `x ← x − f(x)/f'(x)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonRaphson {
    /// Stop once a step is shorter than this, relative to `max(1, |x|)`.
    pub tolerance: f64,
    /// Give up after this many steps.
    pub max_iterations: usize,
}

impl NewtonRaphson {
    /// Creates a refiner with the given stopping rules.
    #[must_use]
    pub const fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self::new(1e-12, 100)
    }
}

impl RootRefiner for NewtonRaphson {
    #[allow(clippy::float_cmp)]
    fn refine(&self, f: &dyn Fn(f64) -> f64, df: &dyn Fn(f64) -> f64, guess: f64) -> Result<f64> {
        let mut x = guess;

        for _ in 0..self.max_iterations {
            let fx = f(x);
            if fx == 0.0 {
                return Ok(x);
            }

            let dfx = df(x);
            if dfx == 0.0 {
                return Err(SolveError::ZeroDerivative { at: x });
            }

            let next = x - fx / dfx;
            if !next.is_finite() {
                break;
            }
            if (next - x).abs() < self.tolerance * x.abs().max(1.0) {
                return Ok(next);
            }
            x = next;
        }

        Err(SolveError::NoConvergence {
            guess,
            iterations: self.max_iterations,
        })
    }
}
