//! Degree-dispatching root solver.

use quartus_calculus::{as_fn, derivative};
use quartus_poly::{Polynomial, SnapPolicy};

use crate::closed_form;
use crate::error::Result;
use crate::newton::{NewtonRaphson, RootRefiner};

/// Offset from the outermost critical points to the first and last guess.
const GUESS_OFFSET: f64 = 0.1;

/// Finds the real roots of a polynomial.
///
/// Degrees one through four use the closed forms in
/// [`closed_form`](crate::closed_form); constants have no roots; higher
/// degrees are refined from guesses by `R`.
#[derive(Clone, Debug)]
pub struct RootSolver<R: RootRefiner = NewtonRaphson> {
    refiner: R,
    policy: SnapPolicy,
}

impl RootSolver {
    /// Creates a solver using Newton–Raphson and the process-wide snap
    /// policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_refiner(NewtonRaphson::default())
    }
}

impl Default for RootSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RootRefiner> RootSolver<R> {
    /// Creates a solver around a custom refiner.
    pub fn with_refiner(refiner: R) -> Self {
        Self {
            refiner,
            policy: SnapPolicy::current(),
        }
    }

    /// Replaces the snap policy used for this solver's results.
    #[must_use]
    pub fn with_policy(mut self, policy: SnapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finds the real roots of `p`.
    ///
    /// Roots from the closed forms keep their formula order and
    /// multiplicity. Iterative roots are distinct and ordered by the
    /// guesses that produced them.
    ///
    /// # Errors
    ///
    /// Propagates solver errors; none occur for a well-formed dispatch.
    pub fn roots(&self, p: &Polynomial) -> Result<Vec<f64>> {
        self.roots_with_guesses(p, &[])
    }

    /// Finds the real roots of `p`, starting the iterative solver from
    /// `guesses` when the degree is five or more.
    ///
    /// Guesses are ignored for lower degrees.
    ///
    /// # Errors
    ///
    /// Propagates solver errors; none occur for a well-formed dispatch.
    pub fn roots_with_guesses(&self, p: &Polynomial, guesses: &[f64]) -> Result<Vec<f64>> {
        let degree = p.degree();
        tracing::trace!(degree, "solving for roots");

        match degree {
            d if d <= 0 => Ok(Vec::new()),
            1 => closed_form::linear(p, &self.policy),
            2 => closed_form::quadratic(p, &self.policy),
            3 => closed_form::cubic(p, &self.policy),
            4 => closed_form::quartic(p, &self.policy),
            _ if guesses.is_empty() => {
                let guesses = self.bracket_guesses(p)?;
                Ok(self.refine_all(p, &guesses))
            }
            _ => Ok(self.refine_all(p, guesses)),
        }
    }

    /// Returns the roots of the derivative of `p`.
    ///
    /// # Errors
    ///
    /// Propagates solver errors; none occur for a well-formed dispatch.
    pub fn critical_points(&self, p: &Polynomial) -> Result<Vec<f64>> {
        self.roots(&derivative(p))
    }

    /// One guess left of the first critical point, one between each
    /// neighbouring pair, one right of the last.
    fn bracket_guesses(&self, p: &Polynomial) -> Result<Vec<f64>> {
        let mut critical: Vec<f64> = self
            .critical_points(p)?
            .into_iter()
            .filter(|x| x.is_finite())
            .collect();
        critical.sort_by(f64::total_cmp);

        let (Some(&first), Some(&last)) = (critical.first(), critical.last()) else {
            return Ok(vec![0.0]);
        };

        let mut guesses = Vec::with_capacity(critical.len() + 1);
        guesses.push(first - GUESS_OFFSET);
        guesses.extend(critical.windows(2).map(|w| (w[0] + w[1]) / 2.0));
        guesses.push(last + GUESS_OFFSET);
        Ok(guesses)
    }

    fn refine_all(&self, p: &Polynomial, guesses: &[f64]) -> Vec<f64> {
        let f = as_fn(p);
        let df = as_fn(&derivative(p));
        let epsilon = self.policy.epsilon();

        let mut found: Vec<f64> = Vec::with_capacity(guesses.len());
        for &guess in guesses {
            match self.refiner.refine(&f, &df, guess) {
                Ok(root) => {
                    let root = self.policy.snap(root);
                    if found.iter().all(|&r| (r - root).abs() > epsilon) {
                        found.push(root);
                    }
                }
                Err(err) => tracing::debug!(guess, %err, "dropping failed refinement"),
            }
        }
        found
    }
}

/// Finds the real roots of `p` with the default solver.
///
/// # Errors
///
/// See [`RootSolver::roots`].
pub fn roots(p: &Polynomial) -> Result<Vec<f64>> {
    RootSolver::new().roots(p)
}

/// Finds the real roots of `p` with the default solver, refining from
/// `guesses` for degree five and above.
///
/// # Errors
///
/// See [`RootSolver::roots_with_guesses`].
pub fn roots_with_guesses(p: &Polynomial, guesses: &[f64]) -> Result<Vec<f64>> {
    RootSolver::new().roots_with_guesses(p, guesses)
}

/// Returns the critical points of `p`: the roots of its derivative.
///
/// # Errors
///
/// See [`RootSolver::critical_points`].
pub fn critical_points(p: &Polynomial) -> Result<Vec<f64>> {
    RootSolver::new().critical_points(p)
}
