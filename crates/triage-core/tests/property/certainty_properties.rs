//! Property tests for the certainty combination law.

use proptest::prelude::*;

use triage_core::certainty::{combine, Certainty};
use triage_core::constants::CERTAINTY_EPSILON as EPS;

fn unit() -> impl Strategy<Value = f64> {
    0.0_f64..=1.0_f64
}

proptest! {
    #[test]
    fn combine_is_commutative(a in unit(), b in unit()) {
        prop_assert!((combine(a, b) - combine(b, a)).abs() < EPS);
    }

    #[test]
    fn combine_is_associative(a in unit(), b in unit(), c in unit()) {
        let left = combine(combine(a, b), c);
        let right = combine(a, combine(b, c));
        prop_assert!((left - right).abs() < EPS, "{} vs {}", left, right);
    }

    #[test]
    fn combine_matches_noisy_or(a in unit(), b in unit()) {
        let noisy_or = 1.0 - (1.0 - a) * (1.0 - b);
        prop_assert!((combine(a, b) - noisy_or).abs() < EPS);
    }

    #[test]
    fn combine_stays_in_unit_interval_and_never_decreases(a in unit(), b in unit()) {
        let (a_c, b_c) = (Certainty::new(a).unwrap(), Certainty::new(b).unwrap());
        let c = a_c.combine(b_c);
        prop_assert!((0.0..=1.0).contains(&c.value()));
        prop_assert!(c.value() + EPS >= a.max(b));
    }

    #[test]
    fn combine_all_is_order_independent(
        seed in unit(),
        mut values in prop::collection::vec(unit(), 0..8),
    ) {
        let seed = Certainty::new(seed).unwrap();
        let to_certainty = |v: &f64| Certainty::new(*v).unwrap();
        let forward = Certainty::combine_all(seed, values.iter().map(to_certainty));
        values.reverse();
        let backward = Certainty::combine_all(seed, values.iter().map(to_certainty));
        prop_assert!(forward.approx_eq(backward, EPS));
    }
}
