//! Twist structures over a residuated lattice.
//!
//! The carrier is `L × L`. Every operation is expressed through the base
//! lattice's meet, join and implication, so a twist structure has no tables
//! of its own beyond the two derived order relations.

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{AlgebraError, AlgebraResult};
use crate::lattice::Lattice;
use crate::pair::TruthPair;
use crate::residuated::ResiduatedLattice;

/// The bilattice-like algebra of `(evidence for, evidence against)` pairs.
#[derive(Clone, Debug)]
pub struct TwistStructure {
    name: Option<String>,
    residuated: ResiduatedLattice,
    elements: IndexSet<TruthPair>,
    truth_relation: IndexSet<(TruthPair, TruthPair)>,
    info_relation: IndexSet<(TruthPair, TruthPair)>,
}

impl TwistStructure {
    /// Build the carrier and both orders from a residuated lattice.
    pub fn new(residuated: ResiduatedLattice) -> Self {
        let base = residuated.lattice();
        let elements: IndexSet<TruthPair> = base
            .elements()
            .iter()
            .flat_map(|t| base.elements().iter().map(move |f| TruthPair::new(t, f)))
            .collect();

        let mut truth_relation = IndexSet::new();
        let mut info_relation = IndexSet::new();
        for p in &elements {
            for q in &elements {
                if Self::truth_le_in(base, p, q) {
                    truth_relation.insert((p.clone(), q.clone()));
                }
                if Self::info_le_in(base, p, q) {
                    info_relation.insert((p.clone(), q.clone()));
                }
            }
        }

        debug!(
            residuated = %residuated.name(),
            carrier = elements.len(),
            truth_pairs = truth_relation.len(),
            info_pairs = info_relation.len(),
            "constructed twist structure"
        );

        TwistStructure {
            name: None,
            residuated,
            elements,
            truth_relation,
            info_relation,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn residuated_lattice(&self) -> &ResiduatedLattice {
        &self.residuated
    }

    /// The base lattice `L`.
    pub fn base(&self) -> &Lattice {
        self.residuated.lattice()
    }

    pub fn elements(&self) -> &IndexSet<TruthPair> {
        &self.elements
    }

    pub fn contains(&self, pair: &TruthPair) -> bool {
        self.elements.contains(pair)
    }

    /// `(top, bottom)`: full evidence for, none against.
    pub fn top(&self) -> TruthPair {
        TruthPair::new(self.base().top(), self.base().bottom())
    }

    /// `(bottom, top)`: no evidence for, full evidence against.
    pub fn bottom(&self) -> TruthPair {
        TruthPair::new(self.base().bottom(), self.base().top())
    }

    pub fn truth_relation(&self) -> &IndexSet<(TruthPair, TruthPair)> {
        &self.truth_relation
    }

    pub fn info_relation(&self) -> &IndexSet<(TruthPair, TruthPair)> {
        &self.info_relation
    }

    fn truth_le_in(base: &Lattice, p: &TruthPair, q: &TruthPair) -> bool {
        base.is_less_than_or_equal(&p.t, &q.t) && base.is_less_than_or_equal(&q.f, &p.f)
    }

    fn info_le_in(base: &Lattice, p: &TruthPair, q: &TruthPair) -> bool {
        base.is_less_than_or_equal(&p.t, &q.t) && base.is_less_than_or_equal(&p.f, &q.f)
    }

    /// Truth order: more evidence for and less against.
    pub fn truth_le(&self, p: &TruthPair, q: &TruthPair) -> bool {
        Self::truth_le_in(self.base(), p, q)
    }

    /// Information order: more evidence on both sides.
    pub fn info_le(&self, p: &TruthPair, q: &TruthPair) -> bool {
        Self::info_le_in(self.base(), p, q)
    }

    /// `(t, f) ↦ (f, t)`
    pub fn negation(&self, p: &TruthPair) -> TruthPair {
        p.swapped()
    }

    /// `(t1 ∧ t2, f1 ∨ f2)`
    pub fn weak_meet(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        Ok(TruthPair::new(base.meet(&p.t, &q.t)?, base.join(&p.f, &q.f)?))
    }

    /// `(t1 ∨ t2, f1 ∧ f2)`
    pub fn weak_join(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        Ok(TruthPair::new(base.join(&p.t, &q.t)?, base.meet(&p.f, &q.f)?))
    }

    /// `(t1 ∧ t2, (t1 ⇒ f2) ∧ (t2 ⇒ f1))`
    ///
    /// Used to weight a successor's value by the strength of the edge leading
    /// to it.
    pub fn residue_meet(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        let t = base.meet(&p.t, &q.t)?;
        let left = base.implies(&p.t, &q.f)?;
        let right = base.implies(&q.t, &p.f)?;
        Ok(TruthPair::new(t, base.meet(left, right)?))
    }

    /// `((t1 ⇒ t2) ∧ (f2 ⇒ f1), t1 ∧ f2)`
    pub fn implication(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        let forward = base.implies(&p.t, &q.t)?;
        let backward = base.implies(&q.f, &p.f)?;
        Ok(TruthPair::new(
            base.meet(forward, backward)?,
            base.meet(&p.t, &q.f)?,
        ))
    }

    /// `(t1 ∧ t2, f1 ∧ f2)`: the information meet.
    pub fn consensus(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        Ok(TruthPair::new(base.meet(&p.t, &q.t)?, base.meet(&p.f, &q.f)?))
    }

    /// `(t1 ∨ t2, f1 ∨ f2)`: the information join.
    pub fn accept_all(&self, p: &TruthPair, q: &TruthPair) -> AlgebraResult<TruthPair> {
        let base = self.base();
        Ok(TruthPair::new(base.join(&p.t, &q.t)?, base.join(&p.f, &q.f)?))
    }

    /// Weak meet of a collection; the empty case is [`TwistStructure::top`].
    pub fn weak_meet_set(&self, pairs: &[TruthPair]) -> AlgebraResult<TruthPair> {
        let base = self.base();
        let t = base.meet_set(pairs.iter().map(|p| p.t.as_str()))?;
        let f = base.join_set(pairs.iter().map(|p| p.f.as_str()))?;
        Ok(TruthPair::new(t, f))
    }

    /// Weak join of a collection; the empty case is [`TwistStructure::bottom`].
    pub fn weak_join_set(&self, pairs: &[TruthPair]) -> AlgebraResult<TruthPair> {
        let base = self.base();
        let t = base.join_set(pairs.iter().map(|p| p.t.as_str()))?;
        let f = base.meet_set(pairs.iter().map(|p| p.f.as_str()))?;
        Ok(TruthPair::new(t, f))
    }

    /// Check that `pair` lies in the carrier.
    pub fn check(&self, pair: &TruthPair) -> AlgebraResult<()> {
        for label in [&pair.t, &pair.f] {
            if !self.base().contains(label) {
                return Err(AlgebraError::UnknownElement {
                    lattice: self.base().name().to_string(),
                    element: label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Two twist structures agree when they are built over the same lattice.
    pub fn same_algebra(&self, other: &TwistStructure) -> bool {
        std::ptr::eq(self, other) || self.base() == other.base()
    }
}
