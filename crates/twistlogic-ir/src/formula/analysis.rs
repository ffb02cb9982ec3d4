//! Structural queries over formulas.

use std::collections::BTreeSet;

use super::Formula;
use crate::lexer::Dialect;

impl Formula {
    /// Proposition names the formula refers to. The constants are not atoms.
    pub fn atoms(&self) -> BTreeSet<String> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<String>) {
        match self {
            Formula::Atom(name) => {
                atoms.insert(name.clone());
            }
            _ => {
                for child in self.children() {
                    child.collect_atoms(atoms);
                }
            }
        }
    }

    /// Action names used by modal prefixes.
    pub fn actions(&self) -> BTreeSet<String> {
        let mut actions = BTreeSet::new();
        self.collect_actions(&mut actions);
        actions
    }

    fn collect_actions(&self, actions: &mut BTreeSet<String>) {
        if let Formula::Diamond { action, .. } | Formula::Box { action, .. } = self {
            actions.insert(action.clone());
        }
        for child in self.children() {
            child.collect_actions(actions);
        }
    }

    /// Maximum nesting of modal prefixes. Evaluation cost grows with the
    /// branching factor raised to this depth.
    pub fn modal_depth(&self) -> usize {
        let inner = self
            .children()
            .into_iter()
            .map(Formula::modal_depth)
            .max()
            .unwrap_or(0);
        if self.is_modal() {
            inner + 1
        } else {
            inner
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Formula::size)
            .sum::<usize>()
    }

    pub fn is_modal_free(&self) -> bool {
        self.modal_depth() == 0
    }

    /// The narrowest dialect whose parser accepts the printed formula.
    pub fn required_dialect(&self) -> Dialect {
        match self {
            Formula::Implies(..) | Formula::Iff(..) => Dialect::Residuated,
            _ => {
                if self
                    .children()
                    .into_iter()
                    .any(|c| c.required_dialect() == Dialect::Residuated)
                {
                    Dialect::Residuated
                } else {
                    Dialect::Material
                }
            }
        }
    }
}
