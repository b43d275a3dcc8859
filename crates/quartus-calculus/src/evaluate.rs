//! Point evaluation.

use quartus_poly::Polynomial;

/// Evaluates `p` at `x` as `Σ cᵢ·x^eᵢ`.
///
/// Terms are summed in canonical order with no compensation. A negative
/// exponent at `x = 0` yields an infinite or NaN result.
///
/// # Example
///
/// ```
/// use quartus_calculus::evaluate;
/// use quartus_poly::parse;
///
/// assert_eq!(evaluate(&parse("2x^2 - 3x + 10"), 3.5), 24.0);
/// ```
#[must_use]
pub fn evaluate(p: &Polynomial, x: f64) -> f64 {
    p.terms()
        .iter()
        .map(|t| t.coefficient() * x.powi(t.exponent()))
        .sum()
}

/// Returns a closure that evaluates `p`.
///
/// The closure owns a snapshot of the normalized terms, so later changes
/// to `p` do not affect it.
pub fn as_fn(p: &Polynomial) -> impl Fn(f64) -> f64 {
    let terms = p.to_vec();
    move |x| {
        terms
            .iter()
            .map(|t| t.coefficient() * x.powi(t.exponent()))
            .sum()
    }
}
