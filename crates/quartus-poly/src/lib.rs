//! # quartus-poly
//!
//! Real-coefficient univariate polynomials for Quartus.
//!
//! This crate provides:
//! - [`Term`]: a single monomial `c·x^e`
//! - [`Polynomial`]: a lazily normalized sum of terms
//! - A forgiving string parser and a canonical formatter
//! - Arithmetic: addition, subtraction, multiplication, long division
//! - [`SnapPolicy`]: the process-wide near-integer rounding rule
//!
//! ## Normalization
//!
//! Terms may be appended in any order. Every observer (`num_terms`,
//! `get_term`, `degree`, formatting, equality) first sorts the terms by
//! descending exponent and then combines like terms, so reads always see
//! the canonical form.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arith;
pub mod display;
pub mod error;
pub mod like;
pub mod parse;
pub mod policy;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use arith::{
    add, div_rem, div_rem_with, divide, equals, from_roots, modulo, multiply, multiply_with, negate,
    scale, subtract, Division,
};
pub use error::PolyError;
pub use like::PolynomialLike;
pub use parse::{parse, parse_term};
pub use policy::{SnapPolicy, DEFAULT_SNAP_EPSILON};
pub use polynomial::{DegreeName, Polynomial};
pub use term::Term;
