//! Tangent and secant lines.

use quartus_poly::{Polynomial, Term};

use crate::derivative::derivative;
use crate::evaluate::evaluate;

/// Slope of the tangent to `p` at `x`, i.e. `p'(x)`.
#[must_use]
pub fn slope_at(p: &Polynomial, x: f64) -> f64 {
    evaluate(&derivative(p), x)
}

/// The tangent line to `p` at `x`, as `m·x + b`.
///
/// # Example
///
/// ```
/// use quartus_calculus::tangent_at;
/// use quartus_poly::parse;
///
/// let tangent = tangent_at(&parse("3x^3 - 2x + 2"), 0.85);
/// assert_eq!(tangent.to_string(), "4.5025x - 1.68475");
/// ```
#[must_use]
pub fn tangent_at(p: &Polynomial, x: f64) -> Polynomial {
    let (m, b) = tangent_line(p, x);
    line(m, b)
}

/// Slope of the secant through `(x1, p(x1))` and `(x2, p(x2))`.
///
/// Equal abscissas give a non-finite slope.
#[must_use]
pub fn secant_slope_at(p: &Polynomial, x1: f64, x2: f64) -> f64 {
    (evaluate(p, x2) - evaluate(p, x1)) / (x2 - x1)
}

/// The secant line through `(x1, p(x1))` and `(x2, p(x2))`.
#[must_use]
pub fn secant_at(p: &Polynomial, x1: f64, x2: f64) -> Polynomial {
    let (m, b) = secant_line(p, x1, x2);
    line(m, b)
}

/// Returns the tangent line at `x` as a closure.
pub fn tangent_fn(p: &Polynomial, x: f64) -> impl Fn(f64) -> f64 {
    let (m, b) = tangent_line(p, x);
    move |x| m * x + b
}

/// Returns the secant line through `x1` and `x2` as a closure.
pub fn secant_fn(p: &Polynomial, x1: f64, x2: f64) -> impl Fn(f64) -> f64 {
    let (m, b) = secant_line(p, x1, x2);
    move |x| m * x + b
}

fn tangent_line(p: &Polynomial, x: f64) -> (f64, f64) {
    let m = slope_at(p, x);
    (m, evaluate(p, x) - m * x)
}

fn secant_line(p: &Polynomial, x1: f64, x2: f64) -> (f64, f64) {
    let m = secant_slope_at(p, x1, x2);
    (m, evaluate(p, x1) - m * x1)
}

fn line(m: f64, b: f64) -> Polynomial {
    Polynomial::from_terms([Term::new(m, 1), Term::new(b, 0)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartus_poly::parse;

    #[test]
    fn test_slope_at() {
        let p = parse("x^2");
        assert_eq!(slope_at(&p, 3.0), 6.0);
        assert_eq!(slope_at(&p, 0.0), 0.0);
    }

    #[test]
    fn test_tangent_at() {
        let p = parse("3x^3 - 2x + 2");
        assert_eq!(tangent_at(&p, 0.85).to_string(), "4.5025x - 1.68475");
        assert_eq!(tangent_at(&parse("x^2"), 0.0).to_string(), "0");
    }

    #[test]
    fn test_secant_at() {
        let p = parse("2x^2 - 3x + 10");
        assert_eq!(secant_slope_at(&p, 1.0, 3.5), 6.0);
        assert_eq!(secant_at(&p, 1.0, 3.5).to_string(), "6x + 3");
    }

    #[test]
    fn test_secant_with_equal_points() {
        let p = parse("x^2");
        assert!(secant_slope_at(&p, 2.0, 2.0).is_nan());
    }

    #[test]
    fn test_line_closures() {
        let p = parse("2x^2 - 3x + 10");
        let secant = secant_fn(&p, 1.0, 3.5);
        assert_eq!(secant(1.0), 9.0);
        assert_eq!(secant(3.5), 24.0);

        let tangent = tangent_fn(&parse("x^2"), 1.0);
        assert_eq!(tangent(1.0), 1.0);
        assert_eq!(tangent(2.0), 3.0);
    }
}
