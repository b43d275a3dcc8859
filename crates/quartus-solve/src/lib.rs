//! # quartus-solve
//!
//! Real root finding for Quartus polynomials.
//!
//! Polynomials of degree one through four are solved in closed form.
//! Higher degrees are solved iteratively: the critical points (found by
//! solving the derivative, recursively) bracket the roots, and a
//! [`RootRefiner`] polishes a guess inside each bracket.
//!
//! # Example
//!
//! ```
//! use quartus_poly::parse;
//! use quartus_solve::roots;
//!
//! let found = roots(&parse("2x^2 + 7x - 4")).unwrap();
//! assert_eq!(found, vec![0.5, -4.0]);
//! ```
//!
//! Every root passes through the process-wide [`SnapPolicy`], so values
//! within the snap epsilon of an integer come back as that integer.
//!
//! [`SnapPolicy`]: quartus_poly::SnapPolicy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod closed_form;
pub mod error;
pub mod extrema;
pub mod newton;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use closed_form::{roots_cubic, roots_linear, roots_quadratic, roots_quartic};
pub use error::SolveError;
pub use extrema::{inflection_points, local_maxima, local_minima};
pub use newton::{NewtonRaphson, RootRefiner};
pub use roots::{critical_points, roots, roots_with_guesses, RootSolver};
