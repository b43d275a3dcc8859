//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are small integers so every operation is exact in `f64`
//! and textual equality coincides with mathematical equality.

use proptest::prelude::*;

use crate::arith::{add, div_rem, multiply, subtract};
use crate::parse::parse;
use crate::polynomial::Polynomial;
use crate::term::Term;

// Strategy for generating small integer coefficients
fn small_coeff() -> impl Strategy<Value = f64> {
    (-20i32..=20).prop_map(f64::from)
}

// Strategy for generating small polynomials (up to degree 5, unordered terms)
fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((small_coeff(), 0i32..=5), 0..=6)
        .prop_map(|terms| terms.into_iter().map(|(c, e)| Term::new(c, e)).collect())
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

// Divisors with a leading coefficient of ±1 keep long division exact
fn unit_divisor() -> impl Strategy<Value = Polynomial> {
    (prop_oneof![Just(1.0), Just(-1.0)], 0i32..=3, small_poly()).prop_map(|(lead, deg, rest)| {
        let mut divisor: Polynomial = rest
            .terms()
            .iter()
            .filter(|t| t.exponent() < deg)
            .copied()
            .collect();
        divisor.add_term(Term::new(lead, deg));
        divisor
    })
}

proptest! {
    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(add(&a, &b), add(&b, &a));
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(add(&add(&a, &b), &c), add(&a, &add(&b, &c)));
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(multiply(&a, &b), multiply(&b, &a));
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        let left = multiply(&a, &add(&b, &c));
        let right = add(&multiply(&a, &b), &multiply(&a, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn poly_mul_identity(a in small_poly()) {
        prop_assert_eq!(multiply(&a, &Polynomial::constant(1.0)), a);
    }

    #[test]
    fn poly_subtract_self(a in small_poly()) {
        prop_assert!(subtract(&a, &a).is_zero());
    }

    #[test]
    fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!(multiply(&a, &b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
        let sum = add(&a, &b);
        prop_assert!(sum.is_zero() || sum.degree() <= a.degree().max(b.degree()));
    }

    #[test]
    fn poly_division_identity(a in small_poly(), d in unit_divisor()) {
        let division = div_rem(&a, &d).unwrap();
        prop_assert!(division.remainder.is_zero() || division.remainder.degree() < d.degree());
        let rebuilt = add(&multiply(&division.quotient, &d), &division.remainder);
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn poly_canonical_round_trip(a in small_poly()) {
        let text = a.to_string();
        prop_assert_eq!(parse(&text).to_string(), text);
    }

    #[test]
    fn poly_terms_are_normalized(a in small_poly()) {
        let terms = a.to_vec();
        prop_assert!(terms.windows(2).all(|w| w[0].exponent() > w[1].exponent()));
        prop_assert!(terms.iter().all(|t| t.coefficient() != 0.0));
    }
}
