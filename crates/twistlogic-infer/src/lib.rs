//! # TwistLogic Infer
//!
//! Worlds, weighted multi-action models and the evaluator that computes a
//! formula's truth pair at a world.
//!
//! ## Semantics
//!
//! | Formula | Value |
//! |---------|-------|
//! | `TOP` / `BOT` | `(top, bottom)` / `(bottom, top)` |
//! | `p` | the world's assignment of `p` |
//! | `~A` | `negation(A)` |
//! | `A & B` / `A \| B` | `weak_meet` / `weak_join` |
//! | `A -> B` | `weak_join(~A, B)` |
//! | `A <-> B` | `weak_meet(A -> B, B -> A)` |
//! | `A => B` | twist `implication(A, B)` |
//! | `A <=> B` | `weak_meet(A => B, B => A)` |
//! | `<a>A` | `weak_join_set` over stored `a`-successors `v` of `residue_meet(R(a)(w)(v), A at v)` |
//! | `[a]A` | `~<a>~A` |
//!
//! Evaluation cost is the formula size times the branching factor raised to
//! the modal depth; nothing here bounds it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use twistlogic_algebra::{boolean_lattice, ResiduatedLattice, TruthPair, TwistStructure};
//! use twistlogic_infer::{check_validity, Evaluate, Model, World};
//! use twistlogic_ir::parse;
//!
//! let twist = Arc::new(TwistStructure::new(ResiduatedLattice::from_lattice(boolean_lattice())));
//! let model = Model::builder("M", twist.clone())
//!     .world(World::new("world_1", "w1", twist.clone()).with_assignment("p", "(1, 0)"))
//!     .world(World::new("world_2", "w2", twist.clone()).with_assignment("q", "(1, 0)"))
//!     .relate_weighted("a", "world_1", "world_2", TruthPair::new("1", "0"))
//!     .build()
//!     .unwrap();
//!
//! let w1 = model.get_world("w1").unwrap();
//! let value = parse("<a>q").unwrap().evaluate(&model, w1, &twist).unwrap();
//! assert_eq!(value, TruthPair::new("1", "0"));
//!
//! let report = check_validity(&parse("TOP").unwrap(), &model).unwrap();
//! assert!(report.valid);
//! ```

mod error;
mod eval;
mod model;
mod validity;
mod world;


pub use error::{InferError, InferResult};
pub use eval::Evaluate;
pub use model::{Model, ModelBuilder, Successors};
pub use validity::{check_validity, evaluate_checked, missing_atoms, ValidityReport, WorldValue};
pub use world::{AssignedValue, World};
