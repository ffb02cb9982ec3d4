//! # TwistLogic Algebra
//!
//! Finite lattices, residuated lattices and the twist structures built over
//! them. These are the truth-value algebras the evaluator computes in.
//!
//! ## Overview
//!
//! A [`Lattice`] is given extensionally: a set of labels, the pairs of its
//! partial order and an implication table. Meet and join are derived from the
//! order by searching for the unique greatest lower (least upper) bound, so an
//! order that is not a lattice is rejected when the lattice is built.
//!
//! A [`TwistStructure`] over a [`ResiduatedLattice`] `L` has carrier `L × L`.
//! A value `(t, f)` carries evidence for and evidence against a proposition
//! independently, which lets a formula be both true and false at once without
//! everything else becoming true.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `negation(t, f)` | `(f, t)` |
//! | `weak_meet` | `(t1 ∧ t2, f1 ∨ f2)` |
//! | `weak_join` | `(t1 ∨ t2, f1 ∧ f2)` |
//! | `residue_meet` | `(t1 ∧ t2, (t1 ⇒ f2) ∧ (t2 ⇒ f1))` |
//! | `implication` | `((t1 ⇒ t2) ∧ (f2 ⇒ f1), t1 ∧ f2)` |
//! | `consensus` | `(t1 ∧ t2, f1 ∧ f2)` |
//! | `accept_all` | `(t1 ∨ t2, f1 ∨ f2)` |
//!
//! ## Quick Start
//!
//! ```rust
//! use twistlogic_algebra::{Lattice, ResiduatedLattice, TruthPair, TwistStructure};
//!
//! let boolean = Lattice::new(
//!     "Bool",
//!     vec!["0", "1"],
//!     vec![("0", "0"), ("0", "1"), ("1", "1")],
//!     vec![
//!         (("0", "0"), "1"),
//!         (("0", "1"), "1"),
//!         (("1", "0"), "0"),
//!         (("1", "1"), "1"),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(boolean.top(), "1");
//!
//! let twist = TwistStructure::new(ResiduatedLattice::from_lattice(boolean));
//! let p = TruthPair::new("1", "0");
//! let not_p = twist.negation(&p);
//! assert_eq!(twist.weak_meet(&p, &not_p).unwrap(), TruthPair::new("0", "1"));
//! assert_eq!(twist.consensus(&p, &not_p).unwrap(), TruthPair::new("0", "0"));
//! ```

mod error;
mod lattice;
mod pair;
mod residuated;
mod twist;


pub use error::{AlgebraError, AlgebraResult, LatticeOp};
pub use lattice::Lattice;
pub use pair::TruthPair;
pub use residuated::ResiduatedLattice;
pub use twist::TwistStructure;

/// The two-element Boolean lattice `{0 < 1}` with classical implication.
///
/// Handy as a default algebra and in tests.
pub fn boolean_lattice() -> Lattice {
    chain_lattice("Bool", ["0", "1"])
}

/// A finite chain with the Gödel implication: `a ⇒ b` is top when `a ≤ b`
/// and `b` otherwise.
///
/// Labels are given from least to greatest. An empty label list produces the
/// one-element chain `{0}`.
pub fn chain_lattice<I, S>(name: &str, labels: I) -> Lattice
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let unique: indexmap::IndexSet<String> = labels.into_iter().map(Into::into).collect();
    let mut labels: Vec<String> = unique.into_iter().collect();
    if labels.is_empty() {
        labels.push("0".to_string());
    }

    let mut order = Vec::new();
    let mut implication = Vec::new();
    let top = labels.len() - 1;
    for (i, a) in labels.iter().enumerate() {
        for (j, b) in labels.iter().enumerate() {
            if i <= j {
                order.push((a.clone(), b.clone()));
            }
            let value = if i <= j { &labels[top] } else { b };
            implication.push(((a.clone(), b.clone()), value.clone()));
        }
    }

    match Lattice::new(name, labels.clone(), order, implication) {
        Ok(lattice) => lattice,
        // A chain always has unique meets and joins.
        Err(e) => unreachable!("chain lattice construction failed: {e}"),
    }
}
