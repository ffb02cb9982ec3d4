//! Property-based tests for the formula language
//!
//! Random formulas are printed and parsed back, and the structural queries are
//! checked against their definitions.

use proptest::prelude::*;
use twistlogic_ir::{parse_with, tokenize, Dialect, Formula};

// ===== Strategies for generating test data =====

/// Proposition names that never collide with the constants.
fn arb_atom_name() -> impl Strategy<Value = String> {
    "[a-s][a-z0-9_]{0,3}".prop_map(|s| s.to_string())
}

fn arb_action() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,2}".prop_map(|s| s.to_string())
}

fn arb_formula(depth: u32) -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        arb_atom_name().prop_map(Formula::atom),
        Just(Formula::top()),
        Just(Formula::bottom()),
    ];

    leaf.prop_recursive(depth, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::negate),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::material_implies(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::material_iff(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::implies(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::iff(a, b)),
            (arb_action(), inner.clone()).prop_map(|(a, f)| Formula::modal_diamond(a, f)),
            (arb_action(), inner).prop_map(|(a, f)| Formula::modal_box(a, f)),
        ]
    })
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_display_parses_back(f in arb_formula(4)) {
        let text = f.to_string();
        let parsed = parse_with(&text, Dialect::Residuated).unwrap();
        prop_assert_eq!(parsed, f);
    }

    #[test]
    fn prop_material_output_parses_in_material_dialect(f in arb_formula(4)) {
        if f.required_dialect() == Dialect::Material {
            prop_assert!(parse_with(&f.to_string(), Dialect::Material).is_ok());
        }
    }

    #[test]
    fn prop_and_atoms_is_union(a in arb_formula(3), b in arb_formula(3)) {
        let both = Formula::and(a.clone(), b.clone()).atoms();
        let expected: std::collections::BTreeSet<String> =
            a.atoms().union(&b.atoms()).cloned().collect();
        prop_assert_eq!(both, expected);
    }

    #[test]
    fn prop_negation_preserves_atoms_and_depth(f in arb_formula(4)) {
        let not_f = Formula::negate(f.clone());
        prop_assert_eq!(not_f.atoms(), f.atoms());
        prop_assert_eq!(not_f.modal_depth(), f.modal_depth());
        prop_assert_eq!(not_f.size(), f.size() + 1);
    }

    #[test]
    fn prop_modal_prefix_adds_depth(f in arb_formula(3), action in arb_action()) {
        let boxed = Formula::modal_box(action.clone(), f.clone());
        prop_assert_eq!(boxed.modal_depth(), f.modal_depth() + 1);
        prop_assert!(boxed.actions().contains(&action));
    }

    #[test]
    fn prop_tokenize_ends_with_eof_at_length(f in arb_formula(3)) {
        let text = f.to_string();
        let tokens = tokenize(&text, Dialect::Residuated).unwrap();
        let last = tokens.last().unwrap();
        prop_assert!(last.is_eof());
        prop_assert_eq!(last.position, text.chars().count());
    }
}
