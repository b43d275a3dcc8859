//! Operations on anything that reads as a polynomial.
//!
//! Every function here accepts its polynomial operands as
//! `impl Into<PolynomialLike>`: a [`Polynomial`] (owned or borrowed), a
//! string in the input syntax, or a number. Operands are coerced once and
//! never modified.
//!
//! ```
//! use quartus::api;
//! use quartus::poly::parse;
//!
//! let p = parse("x^2 - 1");
//! assert_eq!(api::evaluate(&p, 3.0).unwrap(), 8.0);
//! assert_eq!(api::add(&p, 1).unwrap().to_string(), "x^2");
//! assert!(api::equals(&p, "-1 + x^2").unwrap());
//! ```

use std::borrow::Cow;

use quartus_calculus::EndBehavior;
use quartus_poly::{DegreeName, Division, Polynomial, PolynomialLike, Term};

use crate::error::Result;

fn coerce<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<Cow<'a, Polynomial>> {
    let like: PolynomialLike<'a> = p.into();
    Ok(like.coerce()?)
}

/// Parses a polynomial. Unrecognised terms are dropped.
#[must_use]
pub fn parse(input: &str) -> Polynomial {
    quartus_poly::parse(input)
}

/// Formats `p` canonically, with or without spaces around the operators.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn to_string<'a>(p: impl Into<PolynomialLike<'a>>, spaces: bool) -> Result<String> {
    Ok(coerce(p)?.render(spaces))
}

/// Appends a term to `p` in place.
pub fn add_term(p: &mut Polynomial, term: Term) {
    p.add_term(term);
}

/// Returns the number of terms in normal form.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn num_terms<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<usize> {
    Ok(coerce(p)?.num_terms())
}

/// Returns the `n`-th term in normal form, or a zero term past the end.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn get_term<'a>(p: impl Into<PolynomialLike<'a>>, n: usize) -> Result<Term> {
    Ok(coerce(p)?.get_term(n))
}

/// Returns the degree of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn degree<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<i32> {
    Ok(coerce(p)?.degree())
}

/// Returns the conventional name of the degree of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn degree_name<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<DegreeName> {
    Ok(coerce(p)?.degree_name())
}

/// Returns `p + q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced.
pub fn add<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Polynomial> {
    Ok(quartus_poly::add(&*coerce(p)?, &*coerce(q)?))
}

/// Returns `p - q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced.
pub fn subtract<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Polynomial> {
    Ok(quartus_poly::subtract(&*coerce(p)?, &*coerce(q)?))
}

/// Returns `p · q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced.
pub fn multiply<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Polynomial> {
    Ok(quartus_poly::multiply(&*coerce(p)?, &*coerce(q)?))
}

/// Returns the quotient of `p / q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced or `q` is zero.
pub fn divide<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Polynomial> {
    Ok(quartus_poly::divide(&*coerce(p)?, &*coerce(q)?)?)
}

/// Returns both quotient and remainder of `p / q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced or `q` is zero.
pub fn div_rem<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Division> {
    Ok(quartus_poly::div_rem(&*coerce(p)?, &*coerce(q)?)?)
}

/// Returns the remainder of `p / q`.
///
/// # Errors
///
/// Fails if an operand cannot be coerced or `q` is zero.
pub fn modulo<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<Polynomial> {
    Ok(quartus_poly::modulo(&*coerce(p)?, &*coerce(q)?)?)
}

/// Evaluates `p` at `x`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn evaluate<'a>(p: impl Into<PolynomialLike<'a>>, x: f64) -> Result<f64> {
    Ok(quartus_calculus::evaluate(&*coerce(p)?, x))
}

/// Returns the `n`-th derivative of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn derivative<'a>(p: impl Into<PolynomialLike<'a>>, n: u32) -> Result<Polynomial> {
    Ok(quartus_calculus::nth_derivative(&*coerce(p)?, n))
}

/// Returns the `n`-th antiderivative of `p` plus the constant `c`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn antiderivative<'a>(p: impl Into<PolynomialLike<'a>>, n: u32, c: f64) -> Result<Polynomial> {
    Ok(quartus_calculus::nth_antiderivative(&*coerce(p)?, n, c))
}

/// Finds the real roots of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn roots<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<Vec<f64>> {
    Ok(quartus_solve::roots(&*coerce(p)?)?)
}

/// Finds the real roots of `p`, starting from `guesses` for degree five
/// and above.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn roots_with_guesses<'a>(p: impl Into<PolynomialLike<'a>>, guesses: &[f64]) -> Result<Vec<f64>> {
    Ok(quartus_solve::roots_with_guesses(&*coerce(p)?, guesses)?)
}

/// Returns the roots of the derivative of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn critical_points<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<Vec<f64>> {
    Ok(quartus_solve::critical_points(&*coerce(p)?)?)
}

/// Returns the local maxima of `p`, optionally within bounds.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn local_maxima<'a>(
    p: impl Into<PolynomialLike<'a>>,
    x_min: Option<f64>,
    x_max: Option<f64>,
) -> Result<Vec<f64>> {
    Ok(quartus_solve::local_maxima(&*coerce(p)?, x_min, x_max)?)
}

/// Returns the local minima of `p`, optionally within bounds.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn local_minima<'a>(
    p: impl Into<PolynomialLike<'a>>,
    x_min: Option<f64>,
    x_max: Option<f64>,
) -> Result<Vec<f64>> {
    Ok(quartus_solve::local_minima(&*coerce(p)?, x_min, x_max)?)
}

/// Returns the inflection points of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn inflection_points<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<Vec<f64>> {
    Ok(quartus_solve::inflection_points(&*coerce(p)?)?)
}

/// Returns the tangent line to `p` at `x`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn tangent_at<'a>(p: impl Into<PolynomialLike<'a>>, x: f64) -> Result<Polynomial> {
    Ok(quartus_calculus::tangent_at(&*coerce(p)?, x))
}

/// Returns the secant line through `x1` and `x2`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn secant_at<'a>(p: impl Into<PolynomialLike<'a>>, x1: f64, x2: f64) -> Result<Polynomial> {
    Ok(quartus_calculus::secant_at(&*coerce(p)?, x1, x2))
}

/// Returns the slope of `p` at `x`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn slope_at<'a>(p: impl Into<PolynomialLike<'a>>, x: f64) -> Result<f64> {
    Ok(quartus_calculus::slope_at(&*coerce(p)?, x))
}

/// Returns the slope of the secant through `x1` and `x2`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn secant_slope_at<'a>(p: impl Into<PolynomialLike<'a>>, x1: f64, x2: f64) -> Result<f64> {
    Ok(quartus_calculus::secant_slope_at(&*coerce(p)?, x1, x2))
}

/// Returns the end behavior of `p`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn end_behavior<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<EndBehavior> {
    Ok(quartus_calculus::end_behavior(&*coerce(p)?))
}

/// True if `p` is the zero polynomial.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn is_zero<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<bool> {
    Ok(coerce(p)?.is_zero())
}

/// True if `p` has no term in `x`.
///
/// # Errors
///
/// Fails if `p` cannot be coerced.
pub fn is_constant<'a>(p: impl Into<PolynomialLike<'a>>) -> Result<bool> {
    Ok(coerce(p)?.is_constant())
}

/// True if `p` and `q` have the same canonical form.
///
/// # Errors
///
/// Fails if an operand cannot be coerced.
pub fn equals<'a, 'b>(
    p: impl Into<PolynomialLike<'a>>,
    q: impl Into<PolynomialLike<'b>>,
) -> Result<bool> {
    Ok(quartus_poly::equals(&*coerce(p)?, &*coerce(q)?))
}

/// Builds the monic polynomial with the given roots.
#[must_use]
pub fn create_from_roots(roots: &[f64]) -> Polynomial {
    quartus_poly::from_roots(roots)
}
