//! TwistLogic - weighted paraconsistent multi-modal logic
//!
//! This is the top-level umbrella crate that re-exports all TwistLogic components.
//!
//! # Architecture
//!
//! - **Syntax**: `ir` (formulas, lexer, parser)
//! - **Algebra**: `algebra` (lattices, residuated lattices, twist structures)
//! - **Semantics**: `infer` (worlds, models, evaluation, validity)

pub use twistlogic_algebra as algebra;
pub use twistlogic_infer as infer;
pub use twistlogic_ir as ir;

/// The names needed to build a model and evaluate formulas in it.
pub mod prelude {
    pub use twistlogic_algebra::{Lattice, ResiduatedLattice, TruthPair, TwistStructure};
    pub use twistlogic_infer::{check_validity, Evaluate, Model, World};
    pub use twistlogic_ir::{parse, parse_with, Dialect, Formula};
}
