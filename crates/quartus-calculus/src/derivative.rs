//! Differentiation by the power rule.
//!
//! For p(x) = Σ cᵢxᵉⁱ the derivative is Σ (cᵢ·eᵢ)xᵉⁱ⁻¹. Constant terms
//! vanish; negative exponents follow the same rule.

use quartus_poly::{Polynomial, Term};

/// Computes the first derivative.
#[must_use]
pub fn derivative(p: &Polynomial) -> Polynomial {
    p.terms()
        .iter()
        .map(|t| {
            Term::new(
                t.coefficient() * f64::from(t.exponent()),
                t.exponent() - 1,
            )
        })
        .collect()
}

/// Computes the `n`-th derivative. `n == 0` returns a copy of `p`.
///
/// Differentiation stops as soon as an intermediate result is zero, since
/// every later derivative is zero as well.
#[must_use]
pub fn nth_derivative(p: &Polynomial, n: u32) -> Polynomial {
    let mut result = p.clone();
    for _ in 0..n {
        if result.is_zero() {
            break;
        }
        result = derivative(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartus_poly::parse;

    #[test]
    fn test_derivative() {
        let p = parse("12x^3 + 3x^2 + 2x + 1");
        assert_eq!(derivative(&p).to_string(), "36x^2 + 6x + 2");
    }

    #[test]
    fn test_second_derivative() {
        let p = parse("3x^4 + 2x^3 + x^2 + 7");
        assert_eq!(nth_derivative(&p, 1).to_string(), "12x^3 + 6x^2 + 2x");
        assert_eq!(nth_derivative(&p, 2).to_string(), "36x^2 + 12x + 2");
        assert_eq!(nth_derivative(&p, 3).to_string(), "72x + 12");
    }

    #[test]
    fn test_derivative_of_constant() {
        assert!(derivative(&parse("42")).is_zero());
        assert!(derivative(&Polynomial::new()).is_zero());
    }

    #[test]
    fn test_nth_derivative_past_degree() {
        let p = parse("x^2 + x");
        assert!(nth_derivative(&p, 3).is_zero());
        assert!(nth_derivative(&p, 1_000_000).is_zero());
    }

    #[test]
    fn test_zeroth_derivative_is_copy() {
        let p = parse("5x^3 - x");
        assert_eq!(nth_derivative(&p, 0), p);
    }

    #[test]
    fn test_derivative_negative_exponent() {
        assert_eq!(derivative(&parse("x^-1")).to_string(), "-x^-2");
    }
}
