//! # quartus-calculus
//!
//! Calculus on Quartus polynomials.
//!
//! This crate provides:
//! - Evaluation, and closures standing in for a polynomial as a function
//! - Derivatives and antiderivatives of any order, definite integrals
//! - Tangent and secant lines
//! - End behavior, symmetry, monotonicity and concavity
//!
//! Every operation takes its operands by reference and returns a new
//! polynomial or number.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod antiderivative;
pub mod behavior;
pub mod derivative;
pub mod evaluate;
pub mod tangent;

#[cfg(test)]
mod proptests;

pub use antiderivative::{antiderivative, definite_integral, nth_antiderivative};
pub use behavior::{
    concavity_at, end_behavior, is_even, is_odd, monotonicity_at, Concavity, EndBehavior,
    Monotonicity, Quadrant,
};
pub use derivative::{derivative, nth_derivative};
pub use evaluate::{as_fn, evaluate};
pub use tangent::{secant_at, secant_fn, secant_slope_at, slope_at, tangent_at, tangent_fn};
