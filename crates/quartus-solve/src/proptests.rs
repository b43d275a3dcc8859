//! Property-based tests for root finding.

use proptest::prelude::*;

use quartus_calculus::evaluate;
use quartus_poly::from_roots;

use crate::roots::roots;

// Distinct small integer roots, up to five of them
fn integer_roots(max: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::btree_set(-6i32..=6, 1..=max)
        .prop_map(|set| set.into_iter().map(f64::from).collect())
}

proptest! {
    #[test]
    fn every_root_found_is_a_root(expected in integer_roots(5)) {
        let p = from_roots(&expected);
        for root in roots(&p).unwrap() {
            prop_assert!(root.is_finite());
            prop_assert!(evaluate(&p, root).abs() < 1e-6, "p({}) != 0 for {}", root, p);
        }
    }

    #[test]
    fn low_degree_roots_are_complete(expected in integer_roots(3)) {
        let p = from_roots(&expected);
        let mut found = roots(&p).unwrap();
        found.sort_by(f64::total_cmp);
        prop_assert_eq!(found, expected);
    }
}
