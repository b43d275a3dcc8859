//! # Quartus
//!
//! Polynomial algebra, calculus and root finding over the reals.
//!
//! Quartus works with univariate polynomials in `x` with `f64`
//! coefficients and integer exponents.
//!
//! ## Features
//!
//! - **Forgiving input**: `"3x^2 - x + 4"`, `"-X^3+2"`, `"5"` all parse
//! - **Canonical output**: descending exponents, 12 significant digits
//! - **Arithmetic**: add, subtract, multiply, long division with remainder
//! - **Calculus**: derivatives, antiderivatives, tangents and secants
//! - **Roots**: closed forms up to degree four, Newton–Raphson beyond
//!
//! ## Quick Start
//!
//! ```rust
//! use quartus::api;
//!
//! let product = api::multiply("3x + 1", "4x^2 + 2x + 1").unwrap();
//! assert_eq!(product.to_string(), "12x^3 + 10x^2 + 5x + 1");
//!
//! let roots = api::roots("2x^2 + 7x - 4").unwrap();
//! assert_eq!(roots, vec![0.5, -4.0]);
//! ```
//!
//! The crate-level modules re-export the layers underneath: [`poly`] for
//! the data model and arithmetic, [`calculus`], and [`solve`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
mod error;


pub use error::{Error, Result};

pub use quartus_calculus as calculus;
pub use quartus_poly as poly;
pub use quartus_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quartus_calculus::{Concavity, EndBehavior, Monotonicity, Quadrant};
    pub use quartus_poly::{DegreeName, Division, Polynomial, PolynomialLike, SnapPolicy, Term};
    pub use quartus_solve::{NewtonRaphson, RootRefiner, RootSolver};

    pub use crate::{Error, Result};
}
