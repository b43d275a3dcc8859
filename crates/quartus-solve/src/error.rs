//! Error types for root finding.

use quartus_poly::PolyError;
use thiserror::Error;

/// Errors raised by the root solvers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// A closed-form solver was handed a polynomial of the wrong degree.
    #[error("expected a polynomial of degree {expected}, found degree {found}")]
    InvalidDegree {
        /// The degree the solver handles.
        expected: i32,
        /// The degree of the operand.
        found: i32,
    },

    /// Newton's method hit a point where the derivative vanishes.
    #[error("derivative vanishes at x = {at}")]
    ZeroDerivative {
        /// Where the iteration stopped.
        at: f64,
    },

    /// Newton's method did not settle within its iteration budget.
    #[error("no convergence from initial guess {guess} after {iterations} iterations")]
    NoConvergence {
        /// The starting point.
        guess: f64,
        /// Iterations spent.
        iterations: usize,
    },

    /// An error from the polynomial layer.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Result alias for root finding.
pub type Result<T> = std::result::Result<T, SolveError>;
