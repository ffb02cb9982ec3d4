//! Worlds: named states with a valuation of propositions.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use twistlogic_algebra::{AlgebraError, TruthPair, TwistStructure};

use crate::error::{InferError, InferResult};

/// A proposition's value as it was supplied.
///
/// Text starting with `(` is a pair literal and is parsed when the value is
/// read; any other text is a bare label `v` meaning `(v, v)`. Serialized as
/// that text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssignedValue {
    Label(String),
    Pair(TruthPair),
    Literal(String),
}

impl AssignedValue {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.starts_with('(') {
            AssignedValue::Literal(raw)
        } else {
            AssignedValue::Label(trimmed.to_string())
        }
    }

    /// The pair this value stands for.
    pub fn resolve(&self) -> Result<TruthPair, AlgebraError> {
        match self {
            AssignedValue::Label(label) => Ok(TruthPair::uniform(label.clone())),
            AssignedValue::Pair(pair) => Ok(pair.clone()),
            AssignedValue::Literal(raw) => raw.parse(),
        }
    }
}

impl fmt::Display for AssignedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignedValue::Label(label) => write!(f, "{}", label),
            AssignedValue::Pair(pair) => write!(f, "{}", pair),
            AssignedValue::Literal(raw) => write!(f, "{}", raw),
        }
    }
}

impl From<String> for AssignedValue {
    fn from(raw: String) -> Self {
        AssignedValue::from_raw(raw)
    }
}

impl From<&str> for AssignedValue {
    fn from(raw: &str) -> Self {
        AssignedValue::from_raw(raw)
    }
}

impl From<TruthPair> for AssignedValue {
    fn from(pair: TruthPair) -> Self {
        AssignedValue::Pair(pair)
    }
}

impl From<(&str, &str)> for AssignedValue {
    fn from(pair: (&str, &str)) -> Self {
        AssignedValue::Pair(pair.into())
    }
}

impl From<AssignedValue> for String {
    fn from(value: AssignedValue) -> Self {
        value.to_string()
    }
}

/// A state of a model.
///
/// `long_name` is the identity used by relations; `short_name` is for display.
#[derive(Clone, Debug)]
pub struct World {
    long_name: String,
    short_name: String,
    twist: Arc<TwistStructure>,
    assignments: IndexMap<String, AssignedValue>,
}

impl World {
    pub fn new(
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        twist: Arc<TwistStructure>,
    ) -> Self {
        World {
            long_name: long_name.into(),
            short_name: short_name.into(),
            twist,
            assignments: IndexMap::new(),
        }
    }

    /// Build a world from an assignment map in one go.
    pub fn from_assignments<I, K, V>(
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        twist: Arc<TwistStructure>,
        assignments: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AssignedValue>,
    {
        let mut world = World::new(long_name, short_name, twist);
        for (prop, value) in assignments {
            world.assign(prop, value);
        }
        world
    }

    pub fn with_assignment(
        mut self,
        prop: impl Into<String>,
        value: impl Into<AssignedValue>,
    ) -> Self {
        self.assign(prop, value);
        self
    }

    pub fn assign(&mut self, prop: impl Into<String>, value: impl Into<AssignedValue>) {
        self.assignments.insert(prop.into(), value.into());
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn twist(&self) -> &Arc<TwistStructure> {
        &self.twist
    }

    pub fn assignments(&self) -> &IndexMap<String, AssignedValue> {
        &self.assignments
    }

    pub fn get_assignment(&self, prop: &str) -> Option<&AssignedValue> {
        self.assignments.get(prop)
    }

    pub fn defines(&self, prop: &str) -> bool {
        self.assignments.contains_key(prop)
    }

    /// The truth pair of `prop`, checked against the world's carrier.
    pub fn value_of(&self, prop: &str) -> InferResult<TruthPair> {
        let assigned = self
            .get_assignment(prop)
            .ok_or_else(|| InferError::UndefinedAtom {
                atom: prop.to_string(),
                world: self.short_name.clone(),
            })?;

        let value = assigned
            .resolve()
            .map_err(|_| InferError::InvalidAssignment {
                atom: prop.to_string(),
                world: self.short_name.clone(),
                raw: assigned.to_string(),
            })?;

        if !self.twist.contains(&value) {
            return Err(InferError::ValueOutsideCarrier {
                atom: prop.to_string(),
                world: self.short_name.clone(),
                value,
            });
        }
        Ok(value)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.short_name, self.long_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twistlogic_algebra::{boolean_lattice, ResiduatedLattice};

    fn twist() -> Arc<TwistStructure> {
        Arc::new(TwistStructure::new(ResiduatedLattice::from_lattice(
            boolean_lattice(),
        )))
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(
            AssignedValue::from_raw(" 1 "),
            AssignedValue::Label("1".to_string())
        );
        assert!(matches!(
            AssignedValue::from_raw("(1, 0)"),
            AssignedValue::Literal(_)
        ));
        assert_eq!(
            AssignedValue::from_raw("1").resolve().unwrap(),
            TruthPair::new("1", "1")
        );
        assert_eq!(
            AssignedValue::from_raw("('0', '1')").resolve().unwrap(),
            TruthPair::new("0", "1")
        );
    }

    #[test]
    fn test_value_of() {
        let world = World::new("world_1", "w1", twist())
            .with_assignment("p", "(1, 0)")
            .with_assignment("q", "0")
            .with_assignment("r", ("0", "0"));
        assert_eq!(world.value_of("p").unwrap(), TruthPair::new("1", "0"));
        assert_eq!(world.value_of("q").unwrap(), TruthPair::new("0", "0"));
        assert_eq!(world.value_of("r").unwrap(), TruthPair::new("0", "0"));
        assert!(world.defines("p"));
        assert!(!world.defines("s"));
    }

    #[test]
    fn test_undefined_atom_names_short_world() {
        let world = World::new("world_1", "w1", twist());
        assert_eq!(
            world.value_of("p").unwrap_err(),
            InferError::UndefinedAtom {
                atom: "p".to_string(),
                world: "w1".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_literal() {
        let world = World::new("world_1", "w1", twist()).with_assignment("p", "(1, 0, 1)");
        assert!(matches!(
            world.value_of("p"),
            Err(InferError::InvalidAssignment { .. })
        ));
    }

    #[test]
    fn test_value_outside_carrier() {
        let world = World::new("world_1", "w1", twist()).with_assignment("p", "half");
        assert_eq!(
            world.value_of("p").unwrap_err(),
            InferError::ValueOutsideCarrier {
                atom: "p".to_string(),
                world: "w1".to_string(),
                value: TruthPair::new("half", "half"),
            }
        );
    }

    #[test]
    fn test_assignments_serialize_as_text() {
        let world = World::from_assignments(
            "world_1",
            "w1",
            twist(),
            vec![("p", AssignedValue::from(TruthPair::new("1", "0"))), ("q", "1".into())],
        );
        let json = serde_json::to_string(world.assignments()).unwrap();
        assert_eq!(json, r#"{"p":"(1, 0)","q":"1"}"#);
    }
}
