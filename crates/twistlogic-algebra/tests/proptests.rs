//! Property-based tests for twist-structure algebra
//!
//! Chains with the Gödel implication are generated at random sizes and the
//! lattice and twist laws are checked on random carrier elements.

use proptest::prelude::*;
use twistlogic_algebra::{chain_lattice, ResiduatedLattice, TruthPair, TwistStructure};

// ===== Strategies for generating test data =====

fn twist_of_size(n: usize) -> TwistStructure {
    let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
    TwistStructure::new(ResiduatedLattice::from_lattice(chain_lattice("Chain", labels)))
}

fn arb_pair(n: usize) -> impl Strategy<Value = TruthPair> {
    (0..n, 0..n).prop_map(|(t, f)| TruthPair::new(format!("v{t}"), format!("v{f}")))
}

/// A chain size together with three carrier elements.
fn arb_case() -> impl Strategy<Value = (usize, TruthPair, TruthPair, TruthPair)> {
    (1usize..6).prop_flat_map(|n| (Just(n), arb_pair(n), arb_pair(n), arb_pair(n)))
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_meet_and_join_are_commutative((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        let base = twist.base();
        prop_assert_eq!(base.meet(&p.t, &q.t).unwrap(), base.meet(&q.t, &p.t).unwrap());
        prop_assert_eq!(base.join(&p.f, &q.f).unwrap(), base.join(&q.f, &p.f).unwrap());
    }

    #[test]
    fn prop_absorption((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        let base = twist.base();
        let join = base.join(&p.t, &q.t).unwrap();
        prop_assert_eq!(base.meet(&p.t, join).unwrap(), p.t.as_str());
    }

    #[test]
    fn prop_negation_is_involutive((n, p, _, _) in arb_case()) {
        let twist = twist_of_size(n);
        prop_assert_eq!(twist.negation(&twist.negation(&p)), p);
    }

    #[test]
    fn prop_de_morgan((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        let lhs = twist.negation(&twist.weak_meet(&p, &q).unwrap());
        let rhs = twist
            .weak_join(&twist.negation(&p), &twist.negation(&q))
            .unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_weak_meet_is_truth_lower_bound((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        let m = twist.weak_meet(&p, &q).unwrap();
        prop_assert!(twist.truth_le(&m, &p));
        prop_assert!(twist.truth_le(&m, &q));
        let j = twist.weak_join(&p, &q).unwrap();
        prop_assert!(twist.truth_le(&p, &j));
        prop_assert!(twist.truth_le(&q, &j));
    }

    #[test]
    fn prop_consensus_is_info_lower_bound((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        let c = twist.consensus(&p, &q).unwrap();
        prop_assert!(twist.info_le(&c, &p));
        prop_assert!(twist.info_le(&c, &q));
        let a = twist.accept_all(&p, &q).unwrap();
        prop_assert!(twist.info_le(&p, &a));
    }

    #[test]
    fn prop_set_operations_fold_pairwise((n, p, q, r) in arb_case()) {
        let twist = twist_of_size(n);
        let pairwise = twist
            .weak_meet(&twist.weak_meet(&p, &q).unwrap(), &r)
            .unwrap();
        prop_assert_eq!(twist.weak_meet_set(&[p.clone(), q.clone(), r.clone()]).unwrap(), pairwise);

        let pairwise = twist
            .weak_join(&twist.weak_join(&p, &q).unwrap(), &r)
            .unwrap();
        prop_assert_eq!(twist.weak_join_set(&[p, q, r]).unwrap(), pairwise);
    }

    #[test]
    fn prop_operations_stay_in_carrier((n, p, q, _) in arb_case()) {
        let twist = twist_of_size(n);
        for value in [
            twist.residue_meet(&p, &q).unwrap(),
            twist.implication(&p, &q).unwrap(),
            twist.weak_meet(&p, &q).unwrap(),
            twist.accept_all(&p, &q).unwrap(),
        ] {
            prop_assert!(twist.contains(&value), "{} outside carrier", value);
        }
    }

    #[test]
    fn prop_top_is_truth_greatest((n, p, _, _) in arb_case()) {
        let twist = twist_of_size(n);
        prop_assert!(twist.truth_le(&p, &twist.top()));
        prop_assert!(twist.truth_le(&twist.bottom(), &p));
    }
}
