//! The arithmetic engine.
//!
//! Every operation is a pure function of its operands and returns a fresh
//! polynomial. Results are left unnormalized where that is cheaper; the
//! next observer normalizes them.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::{PolyError, Result};
use crate::policy::SnapPolicy;
use crate::polynomial::Polynomial;
use crate::term::Term;

/// Quotient and remainder of a polynomial long division.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    /// The quotient.
    pub quotient: Polynomial,
    /// What is left after the divisor no longer fits.
    pub remainder: Polynomial,
}

/// Adds two polynomials.
#[must_use]
pub fn add(p: &Polynomial, q: &Polynomial) -> Polynomial {
    let mut sum = p.clone();
    sum.extend(q.terms().iter().copied());
    sum
}

/// Subtracts `q` from `p`.
#[must_use]
pub fn subtract(p: &Polynomial, q: &Polynomial) -> Polynomial {
    let mut difference = p.clone();
    difference.extend(q.terms().iter().map(|t| t.negate()));
    difference
}

/// Negates every coefficient.
#[must_use]
pub fn negate(p: &Polynomial) -> Polynomial {
    p.terms().iter().map(|t| t.negate()).collect()
}

/// Multiplies every coefficient by `k`.
#[must_use]
pub fn scale(p: &Polynomial, k: f64) -> Polynomial {
    p.terms()
        .iter()
        .map(|t| Term::new(t.coefficient() * k, t.exponent()))
        .collect()
}

/// Multiplies two polynomials using the process-wide [`SnapPolicy`].
#[must_use]
pub fn multiply(p: &Polynomial, q: &Polynomial) -> Polynomial {
    multiply_with(p, q, &SnapPolicy::current())
}

/// Multiplies two polynomials, snapping each coefficient product with
/// `policy`.
///
/// Every pair of terms contributes one product term; like terms are
/// combined on the next read.
#[must_use]
pub fn multiply_with(p: &Polynomial, q: &Polynomial, policy: &SnapPolicy) -> Polynomial {
    let (lhs, rhs) = (p.terms(), q.terms());
    let mut product = Polynomial::new();

    for a in lhs.iter() {
        for b in rhs.iter() {
            product.add_term(Term::new(
                policy.snap(a.coefficient() * b.coefficient()),
                a.exponent() + b.exponent(),
            ));
        }
    }

    product
}

/// Polynomial long division using the process-wide [`SnapPolicy`].
///
/// # Errors
///
/// Returns [`PolyError::DivideByZero`] if `divisor` is the zero polynomial.
pub fn div_rem(dividend: &Polynomial, divisor: &Polynomial) -> Result<Division> {
    div_rem_with(dividend, divisor, &SnapPolicy::current())
}

/// Polynomial long division with an explicit snap policy.
///
/// Each step divides the leading term of the running remainder by the
/// leading term of the divisor and subtracts that quotient term times the
/// divisor. The leading terms cancel exactly, so the remainder's degree
/// strictly decreases and the loop always terminates.
///
/// # Errors
///
/// Returns [`PolyError::DivideByZero`] if `divisor` is the zero polynomial.
pub fn div_rem_with(
    dividend: &Polynomial,
    divisor: &Polynomial,
    policy: &SnapPolicy,
) -> Result<Division> {
    let lead = divisor.leading_term().ok_or(PolyError::DivideByZero)?;
    let divisor_tail: Polynomial = divisor.terms()[1..].iter().copied().collect();

    let mut quotient = Polynomial::new();
    let mut remainder = dividend.clone();
    let mut steps = 0usize;

    while let Some(top) = remainder.leading_term() {
        if lead.exponent() > top.exponent() {
            break;
        }

        let step = Term::new(
            top.coefficient() / lead.coefficient(),
            top.exponent() - lead.exponent(),
        );
        quotient.add_term(step);

        let remainder_tail: Polynomial = remainder.terms()[1..].iter().copied().collect();
        remainder = subtract(
            &remainder_tail,
            &multiply_with(&divisor_tail, &Polynomial::from(step), policy),
        );
        steps += 1;
    }

    tracing::trace!(steps, divisor = %divisor, "long division finished");
    Ok(Division {
        quotient,
        remainder,
    })
}

/// Returns the quotient of `dividend / divisor`.
///
/// # Errors
///
/// Returns [`PolyError::DivideByZero`] if `divisor` is the zero polynomial.
pub fn divide(dividend: &Polynomial, divisor: &Polynomial) -> Result<Polynomial> {
    div_rem(dividend, divisor).map(|d| d.quotient)
}

/// Returns the remainder of `dividend / divisor`.
///
/// # Errors
///
/// Returns [`PolyError::DivideByZero`] if `divisor` is the zero polynomial.
pub fn modulo(dividend: &Polynomial, divisor: &Polynomial) -> Result<Polynomial> {
    div_rem(dividend, divisor).map(|d| d.remainder)
}

/// Compares two polynomials by their canonical string form.
///
/// This is textual, not numeric, equality: coefficients that differ only
/// beyond the printed precision compare equal, and round-off that survives
/// snapping makes otherwise equal polynomials differ.
#[must_use]
pub fn equals(p: &Polynomial, q: &Polynomial) -> bool {
    p.to_string() == q.to_string()
}

/// Builds `∏ (x - rᵢ)`. An empty slice gives the constant `1`.
///
/// # Example
///
/// ```
/// use quartus_poly::from_roots;
///
/// assert_eq!(from_roots(&[0.0, 3.0, -3.0]).to_string(), "x^3 - 9x");
/// ```
#[must_use]
pub fn from_roots(roots: &[f64]) -> Polynomial {
    roots.iter().fold(Polynomial::one(), |acc, &root| {
        let factor = Polynomial::from_terms([Term::new(1.0, 1), Term::new(-root, 0)]);
        multiply(&acc, &factor)
    })
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

// Operator overloads
impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(&self, &rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        add(&self, rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(&self, &rhs)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        subtract(&self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply(&self, &rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        multiply(&self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply(self, rhs)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        negate(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_add() {
        let sum = add(&parse("3x + 1"), &parse("4x^2 + 2x + 1"));
        assert_eq!(sum.to_string(), "4x^2 + 5x + 2");
    }

    #[test]
    fn test_subtract() {
        let diff = subtract(&parse("3x^2 - 2x + 1"), &parse("2x^2 + 2x"));
        assert_eq!(diff.to_string(), "x^2 - 4x + 1");
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let p = parse("7x^5 - 3x^2 + 0.25");
        assert!(subtract(&p, &p).is_zero());
    }

    #[test]
    fn test_multiply() {
        let product = multiply(&parse("3x + 1"), &parse("4x^2 + 2x + 1"));
        assert_eq!(product.to_string(), "12x^3 + 10x^2 + 5x + 1");
    }

    #[test]
    fn test_multiply_snaps_round_off() {
        let p = Polynomial::constant(0.1 * 3.0);
        let q = Polynomial::monomial(10.0, 1);
        let policy = SnapPolicy::default();
        assert_eq!(multiply_with(&p, &q, &policy).to_string(), "3x");

        let exact = multiply_with(&Polynomial::constant(0.333_33), &Polynomial::constant(3.0), &SnapPolicy::disabled());
        assert_eq!(exact.leading_coefficient(), 0.333_33 * 3.0);
    }

    #[test]
    fn test_divide_with_remainder() {
        let Division {
            quotient,
            remainder,
        } = div_rem(&parse("3x^3 - 5x^2 + 10x - 3"), &parse("3x + 1")).unwrap();
        assert_eq!(quotient.to_string(), "x^2 - 2x + 4");
        assert_eq!(remainder.to_string(), "-7");
    }

    #[test]
    fn test_divide_fractional_quotient() {
        let q = divide(&parse("4x^5 + 2x^2 + 3x + 1"), &parse("3x^2 + 1")).unwrap();
        assert_eq!(
            q.to_string(),
            "1.33333333333x^3 - 0.444444444444x + 0.666666666667"
        );
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            div_rem(&parse("x + 1"), &Polynomial::new()),
            Err(PolyError::DivideByZero)
        );
        assert_eq!(modulo(&parse("x"), &parse("0")), Err(PolyError::DivideByZero));
    }

    #[test]
    fn test_divide_lower_degree_dividend() {
        let d = div_rem(&parse("x + 1"), &parse("x^2")).unwrap();
        assert!(d.quotient.is_zero());
        assert_eq!(d.remainder.to_string(), "x + 1");
    }

    #[test]
    fn test_divide_by_constant() {
        let q = divide(&parse("3x^4 + 6x^3 - 123x^2"), &Polynomial::constant(3.0)).unwrap();
        assert_eq!(q.to_string(), "x^4 + 2x^3 - 41x^2");
    }

    #[test]
    fn test_division_identity_non_monic_divisor() {
        let cases = [
            ("x^2", "3x + 1"),
            ("5x^4 + 3x - 7", "7x^2 - 3"),
            ("x^5 + 1", "3x^2 + 7x + 11"),
            ("2x^3 - x", "6x - 5"),
        ];
        for (p, d) in cases {
            let (p, d) = (parse(p), parse(d));
            let division = div_rem(&p, &d).unwrap();
            assert!(division.remainder.is_zero() || division.remainder.degree() < d.degree());
            let rebuilt = add(&multiply(&division.quotient, &d), &division.remainder);
            assert_eq!(rebuilt, p, "{p} / {d}");
        }
    }

    #[test]
    fn test_modulo() {
        let r = modulo(&parse("x^2 - 1"), &parse("x - 1")).unwrap();
        assert!(r.is_zero());
        let r = modulo(&parse("x^2 + 1"), &parse("x - 1")).unwrap();
        assert_eq!(r.to_string(), "2");
    }

    #[test]
    fn test_equals_is_textual() {
        assert!(equals(&parse("2x + 1"), &parse("1 + x + x")));
        assert!(!equals(&parse("2x + 1"), &parse("2x + 1.001")));
        assert_eq!(parse("x^2 - x"), parse("-x + x^2"));
    }

    #[test]
    fn test_from_roots() {
        assert_eq!(from_roots(&[0.0, 3.0, -3.0]).to_string(), "x^3 - 9x");
        assert_eq!(from_roots(&[1.0, 2.0, -3.0]).to_string(), "x^3 - 7x + 6");
        assert_eq!(from_roots(&[]).to_string(), "1");
    }

    #[test]
    fn test_operators() {
        let p = parse("x + 1");
        let q = parse("x - 1");
        assert_eq!((&p * &q).to_string(), "x^2 - 1");
        assert_eq!((&p + &q).to_string(), "2x");
        assert_eq!((&p - &q).to_string(), "2");
        assert_eq!((-&p).to_string(), "-x - 1");
        assert_eq!((p.clone() * Polynomial::one()).to_string(), "x + 1");
        assert!(Zero::is_zero(&(p.clone() - p)));
    }

    #[test]
    fn test_operands_are_untouched() {
        let p = parse("3x + 1");
        let q = parse("4x^2 + 2x + 1");
        let _ = add(&p, &q);
        let _ = multiply(&p, &q);
        assert_eq!(p.to_string(), "3x + 1");
        assert_eq!(q.to_string(), "4x^2 + 2x + 1");
    }

    #[test]
    fn test_scale_and_negate() {
        let p = parse("2x^2 - 4");
        assert_eq!(scale(&p, 0.5).to_string(), "x^2 - 2");
        assert!(scale(&p, 0.0).is_zero());
        assert_eq!(negate(&p).to_string(), "-2x^2 + 4");
    }
}
