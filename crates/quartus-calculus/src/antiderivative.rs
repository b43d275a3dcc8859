//! Integration using the power rule.
//!
//! For p(x) = Σ cᵢxᵉⁱ the antiderivative is Σ (cᵢ/(eᵢ+1))xᵉⁱ⁺¹ + C.

use quartus_poly::{Polynomial, Term};

use crate::evaluate::evaluate;

/// Computes the antiderivative with integration constant 0.
///
/// A term `c·x^-1` has no polynomial antiderivative. It is integrated by
/// the same rule anyway, so its coefficient becomes non-finite.
#[must_use]
pub fn antiderivative(p: &Polynomial) -> Polynomial {
    p.terms()
        .iter()
        .map(|t| {
            let exponent = t.exponent() + 1;
            if exponent == 0 {
                tracing::debug!(term = %t, "term has no polynomial antiderivative");
            }
            Term::new(t.coefficient() / f64::from(exponent), exponent)
        })
        .collect()
}

/// Computes the `n`-th antiderivative, then adds the constant `c` once.
///
/// `n == 0` returns a copy of `p` without the constant.
///
/// # Example
///
/// ```
/// use quartus_calculus::nth_antiderivative;
/// use quartus_poly::parse;
///
/// let p = parse("6x");
/// assert_eq!(nth_antiderivative(&p, 2, 4.0).to_string(), "x^3 + 4");
/// ```
#[must_use]
pub fn nth_antiderivative(p: &Polynomial, n: u32, c: f64) -> Polynomial {
    if n == 0 {
        return p.clone();
    }

    let mut result = p.clone();
    for _ in 0..n {
        result = antiderivative(&result);
    }
    result.push(c, 0);
    result
}

/// Computes ∫ₐᵇ p(x) dx as F(b) − F(a).
#[must_use]
pub fn definite_integral(p: &Polynomial, a: f64, b: f64) -> f64 {
    let integral = antiderivative(p);
    evaluate(&integral, b) - evaluate(&integral, a)
}
