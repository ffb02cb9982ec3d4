//! Error types for model construction and formula evaluation.

use thiserror::Error;
use twistlogic_algebra::{AlgebraError, TruthPair};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferError {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error("Undefined atom: '{atom}' is not assigned in world '{world}'")]
    UndefinedAtom { atom: String, world: String },

    #[error("Action '{action}' is not defined in model '{model}'")]
    UndefinedAction { action: String, model: String },

    #[error("World '{world}' is not part of model '{model}'")]
    UnknownWorld { world: String, model: String },

    #[error("World '{world}' is added to model '{model}' more than once")]
    DuplicateWorld { world: String, model: String },

    #[error("Weight {weight} of transition '{origin}' -{action}-> '{target}' is not an element of the twist structure")]
    WeightOutsideCarrier {
        action: String,
        origin: String,
        target: String,
        weight: TruthPair,
    },

    #[error("World '{world}' is defined over a different twist structure than model '{model}'")]
    TwistMismatch { world: String, model: String },

    #[error("Atom '{atom}' in world '{world}' has invalid value '{raw}': expected a pair (t, f)")]
    InvalidAssignment {
        atom: String,
        world: String,
        raw: String,
    },

    #[error("Atom '{atom}' in world '{world}' has value {value}, which is not an element of the twist structure")]
    ValueOutsideCarrier {
        atom: String,
        world: String,
        value: TruthPair,
    },

    #[error("World '{world}' has no assignment for: {}", .atoms.join(", "))]
    MissingAssignments { world: String, atoms: Vec<String> },
}

impl InferError {
    /// The failure comes from the algebra (missing implication entry, bound
    /// errors) rather than from the model or the formula.
    pub fn is_algebraic(&self) -> bool {
        matches!(self, InferError::Algebra(_))
    }
}

pub type InferResult<T> = Result<T, InferError>;
