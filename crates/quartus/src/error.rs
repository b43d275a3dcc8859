//! Errors surfaced by the Quartus API.

use quartus_poly::PolyError;
use quartus_solve::SolveError;
use thiserror::Error;

/// Any error raised through the Quartus API.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Raised by arithmetic or operand coercion.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// Raised by a root solver.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Result alias for the Quartus API.
pub type Result<T> = std::result::Result<T, Error>;
