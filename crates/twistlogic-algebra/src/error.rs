//! Error types for lattice and twist-structure algebra.

use std::fmt;

use thiserror::Error;

/// The lattice operation that produced a bound error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeOp {
    Meet,
    Join,
}

impl LatticeOp {
    /// Which side of the operands the candidate bounds lie on.
    pub fn bound_kind(&self) -> &'static str {
        match self {
            LatticeOp::Meet => "lower",
            LatticeOp::Join => "upper",
        }
    }
}

impl fmt::Display for LatticeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeOp::Meet => write!(f, "Meet"),
            LatticeOp::Join => write!(f, "Join"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("The object '{name}' is not a valid lattice: {reason}")]
    InvalidLattice { name: String, reason: String },
    #[error("Element '{element}' is not in lattice '{lattice}'")]
    UnknownElement { lattice: String, element: String },
    #[error("No common {} bounds found for '{a}' and '{b}' in lattice '{lattice}'", .op.bound_kind())]
    MissingBound {
        lattice: String,
        op: LatticeOp,
        a: String,
        b: String,
    },
    #[error("No unique {op} found for '{a}' and '{b}' in lattice '{lattice}'")]
    AmbiguousBound {
        lattice: String,
        op: LatticeOp,
        a: String,
        b: String,
    },
    #[error("Implication '{antecedent}' => '{consequent}' is not defined in lattice '{lattice}'")]
    UndefinedImplication {
        lattice: String,
        antecedent: String,
        consequent: String,
    },
    #[error("Malformed truth pair '{0}': expected a literal of the form (t, f)")]
    MalformedPair(String),
}

impl AlgebraError {
    /// True for failures raised while constructing an algebra, as opposed to
    /// failures of an operation on an already valid one.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, AlgebraError::InvalidLattice { .. })
    }
}

/// Result alias for algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
