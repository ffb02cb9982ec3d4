//! Pretty printing in the concrete syntax.
//!
//! Binary connectives are always parenthesized, so the output parses back to
//! the same tree (under [`Formula::required_dialect`]).

use std::fmt;

use crate::formula::{Formula, BOTTOM_ATOM, TOP_ATOM};

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Top => write!(f, "{}", TOP_ATOM),
            Formula::Bottom => write!(f, "{}", BOTTOM_ATOM),
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Not(child) => write!(f, "~{}", child),
            Formula::And(l, r) => write!(f, "({} & {})", l, r),
            Formula::Or(l, r) => write!(f, "({} | {})", l, r),
            Formula::MaterialImplies(l, r) => write!(f, "({} -> {})", l, r),
            Formula::MaterialIff(l, r) => write!(f, "({} <-> {})", l, r),
            Formula::Implies(l, r) => write!(f, "({} => {})", l, r),
            Formula::Iff(l, r) => write!(f, "({} <=> {})", l, r),
            Formula::Diamond { action, child } => write!(f, "<{}>{}", action, child),
            Formula::Box { action, child } => write!(f, "[{}]{}", action, child),
        }
    }
}
