//! Truth values of a twist structure: `(evidence for, evidence against)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;

/// An element of a twist structure's carrier `L × L`.
///
/// `t` is the evidence for a proposition and `f` the evidence against it.
/// Both components are labels of the base lattice. Serialized as a
/// two-element array `[t, f]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TruthPair {
    pub t: String,
    pub f: String,
}

impl TruthPair {
    pub fn new(t: impl Into<String>, f: impl Into<String>) -> Self {
        TruthPair {
            t: t.into(),
            f: f.into(),
        }
    }

    /// The pair `(label, label)` a bare label stands for.
    pub fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        TruthPair {
            t: label.clone(),
            f: label,
        }
    }

    /// Swap the components.
    pub fn swapped(&self) -> Self {
        TruthPair {
            t: self.f.clone(),
            f: self.t.clone(),
        }
    }
}

impl From<(String, String)> for TruthPair {
    fn from((t, f): (String, String)) -> Self {
        TruthPair { t, f }
    }
}

impl From<(&str, &str)> for TruthPair {
    fn from((t, f): (&str, &str)) -> Self {
        TruthPair::new(t, f)
    }
}

impl From<TruthPair> for (String, String) {
    fn from(pair: TruthPair) -> Self {
        (pair.t, pair.f)
    }
}

impl fmt::Display for TruthPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.t, self.f)
    }
}

impl FromStr for TruthPair {
    type Err = AlgebraError;

    /// Parse a pair literal such as `(1, 0)` or `('a', 'b')`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AlgebraError::MalformedPair(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 2 {
            return Err(malformed());
        }

        let t = unquote(parts[0]).ok_or_else(malformed)?;
        let f = unquote(parts[1]).ok_or_else(malformed)?;
        Ok(TruthPair::new(t, f))
    }
}

/// Trim whitespace and one level of matching quotes; empty labels are rejected.
fn unquote(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let label = ['\'', '"']
        .iter()
        .find_map(|q| raw.strip_prefix(*q).and_then(|r| r.strip_suffix(*q)))
        .unwrap_or(raw)
        .trim();

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_quoted() {
        assert_eq!("(1, 0)".parse::<TruthPair>().unwrap(), TruthPair::new("1", "0"));
        assert_eq!(
            " ('top', \"bot\") ".parse::<TruthPair>().unwrap(),
            TruthPair::new("top", "bot")
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["1, 0", "(1)", "(1, 0, 1)", "(, 0)", "('', 1)", "(1, 0"] {
            assert!(
                matches!(bad.parse::<TruthPair>(), Err(AlgebraError::MalformedPair(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_literal_syntax() {
        let pair = TruthPair::new("a", "b");
        assert_eq!(pair.to_string(), "(a, b)");
        assert_eq!(pair.to_string().parse::<TruthPair>().unwrap(), pair);
    }

    #[test]
    fn test_serde_as_array() {
        let pair = TruthPair::new("1", "0");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"["1","0"]"#);
        let back: TruthPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
