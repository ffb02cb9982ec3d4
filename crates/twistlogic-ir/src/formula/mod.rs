//! Formula abstract syntax tree.

mod analysis;

use serde::{Deserialize, Serialize};

/// Canonical spelling of the top constant (`1`, `TOP`, `top`, ...).
pub const TOP_ATOM: &str = "TOP";
/// Canonical spelling of the bottom constant (`0`, `BOT`, `bot`, ...).
pub const BOTTOM_ATOM: &str = "BOT";

/// A formula of the weighted multi-modal language.
///
/// Trees are owned outright; every child sits behind its own `Box`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// `(top, bottom)` regardless of the world.
    Top,
    /// `(bottom, top)` regardless of the world.
    Bottom,
    Atom(String),
    Not(Box<Formula>),
    /// Weak meet.
    And(Box<Formula>, Box<Formula>),
    /// Weak join.
    Or(Box<Formula>, Box<Formula>),
    /// `~A | B`
    MaterialImplies(Box<Formula>, Box<Formula>),
    /// `(~A | B) & (~B | A)`
    MaterialIff(Box<Formula>, Box<Formula>),
    /// Twist-structure implication.
    Implies(Box<Formula>, Box<Formula>),
    /// Weak meet of the twist implication in both directions.
    Iff(Box<Formula>, Box<Formula>),
    /// `<action>child`: weighted possibility.
    Diamond { action: String, child: Box<Formula> },
    /// `[action]child`: `~<action>~child`.
    Box { action: String, child: Box<Formula> },
}

impl Formula {
    /// A proposition. The spellings `1`/`TOP` and `0`/`BOT` (any case) produce
    /// the constants instead.
    pub fn atom(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "1" || name.eq_ignore_ascii_case(TOP_ATOM) {
            Formula::Top
        } else if name == "0" || name.eq_ignore_ascii_case(BOTTOM_ATOM) {
            Formula::Bottom
        } else {
            Formula::Atom(name)
        }
    }

    pub fn top() -> Self {
        Formula::Top
    }

    pub fn bottom() -> Self {
        Formula::Bottom
    }

    pub fn negate(child: Formula) -> Self {
        Formula::Not(Box::new(child))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn material_implies(left: Formula, right: Formula) -> Self {
        Formula::MaterialImplies(Box::new(left), Box::new(right))
    }

    pub fn material_iff(left: Formula, right: Formula) -> Self {
        Formula::MaterialIff(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    // Modal operators
    /// Create a Diamond operator.
    ///
    /// `<a>P`: some `a`-successor supports `P`, weighted by the edge.
    pub fn modal_diamond(action: impl Into<String>, child: Formula) -> Self {
        Formula::Diamond {
            action: action.into(),
            child: Box::new(child),
        }
    }

    /// Create a Box operator.
    ///
    /// `[a]P`: every `a`-successor supports `P`; defined as `~<a>~P`.
    pub fn modal_box(action: impl Into<String>, child: Formula) -> Self {
        Formula::Box {
            action: action.into(),
            child: Box::new(child),
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Top | Formula::Bottom | Formula::Atom(_))
    }

    pub fn is_modal(&self) -> bool {
        matches!(self, Formula::Diamond { .. } | Formula::Box { .. })
    }

    /// Immediate subformulas, left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Top | Formula::Bottom | Formula::Atom(_) => Vec::new(),
            Formula::Not(child)
            | Formula::Diamond { child, .. }
            | Formula::Box { child, .. } => vec![&**child],
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::MaterialImplies(l, r)
            | Formula::MaterialIff(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => vec![&**l, &**r],
        }
    }
}
