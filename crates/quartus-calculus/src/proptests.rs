//! Property-based tests for differentiation and integration.

use proptest::prelude::*;

use quartus_poly::{Polynomial, Term};

use crate::antiderivative::{antiderivative, nth_antiderivative};
use crate::derivative::{derivative, nth_derivative};
use crate::evaluate::{as_fn, evaluate};

// Strategy for generating polynomials with non-negative exponents
fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec((-50i32..=50, 0i32..=6), 0..=6).prop_map(|terms| {
        terms
            .into_iter()
            .map(|(c, e)| Term::new(f64::from(c), e))
            .collect()
    })
}

proptest! {
    #[test]
    fn derivative_undoes_antiderivative(p in small_poly()) {
        let back = derivative(&antiderivative(&p));
        prop_assert_eq!(back.to_string(), p.to_string());
    }

    #[test]
    fn antiderivative_restores_all_but_constant(p in small_poly()) {
        let back = nth_antiderivative(&derivative(&p), 1, p.constant_term());
        prop_assert_eq!(back.to_string(), p.to_string());
    }

    #[test]
    fn nth_derivative_undoes_nth_antiderivative(p in small_poly(), n in 1u32..=3, c in -10i32..=10) {
        let back = nth_derivative(&nth_antiderivative(&p, n, f64::from(c)), n);
        prop_assert_eq!(back.to_string(), p.to_string());
    }

    #[test]
    fn derivative_lowers_degree(p in small_poly()) {
        prop_assume!(p.degree() > 0);
        prop_assert_eq!(derivative(&p).degree(), p.degree() - 1);
    }

    #[test]
    fn closure_agrees_with_evaluate(p in small_poly(), x in -10.0f64..10.0) {
        prop_assert_eq!(as_fn(&p)(x), evaluate(&p, x));
    }
}
