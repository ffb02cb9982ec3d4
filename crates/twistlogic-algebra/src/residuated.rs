//! Residuated lattices: a lattice whose implication table serves as the residuum.

use crate::lattice::Lattice;

/// A [`Lattice`] used as a residuated lattice under its own name.
///
/// No operations are added; the base lattice's implication table is the
/// residuum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResiduatedLattice {
    name: String,
    lattice: Lattice,
}

impl ResiduatedLattice {
    pub fn new(name: impl Into<String>, lattice: Lattice) -> Self {
        ResiduatedLattice {
            name: name.into(),
            lattice,
        }
    }

    /// Reuse the lattice's own name.
    pub fn from_lattice(lattice: Lattice) -> Self {
        let name = lattice.name().to_string();
        Self::new(name, lattice)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
}

impl AsRef<Lattice> for ResiduatedLattice {
    fn as_ref(&self) -> &Lattice {
        &self.lattice
    }
}
