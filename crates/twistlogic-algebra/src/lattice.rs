//! Finite lattices given by an explicit order relation and implication table.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::{AlgebraError, AlgebraResult, LatticeOp};

/// A finite bounded lattice over string labels.
///
/// Meet and join are not stored; they are derived from the order relation on
/// demand. Construction checks that every pair of elements has a unique meet
/// and join, so a constructed `Lattice` never fails those operations on its own
/// elements. The implication table is taken as given and may be partial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    name: String,
    elements: IndexSet<String>,
    /// `a -> { b | a ≤ b }`
    order: IndexMap<String, IndexSet<String>>,
    /// `a -> b -> a ⇒ b`
    implication: IndexMap<String, IndexMap<String, String>>,
    top: String,
    bottom: String,
}

impl Lattice {
    /// Build and validate a lattice.
    ///
    /// `order` lists the pairs `(a, b)` with `a ≤ b`. It is used as given: callers
    /// supply a reflexive, transitive relation. `implication` maps `(a, b)` to
    /// `a ⇒ b`.
    pub fn new<S, E, O, I>(
        name: impl Into<String>,
        elements: E,
        order: O,
        implication: I,
    ) -> AlgebraResult<Self>
    where
        S: Into<String>,
        E: IntoIterator<Item = S>,
        O: IntoIterator<Item = (S, S)>,
        I: IntoIterator<Item = ((S, S), S)>,
    {
        let name = name.into();
        let invalid = |reason: String| AlgebraError::InvalidLattice {
            name: name.clone(),
            reason,
        };

        let elements: IndexSet<String> = elements.into_iter().map(Into::into).collect();
        if elements.is_empty() {
            return Err(invalid("lattice has no elements".to_string()));
        }

        let mut order_map: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for (a, b) in order {
            let (a, b) = (a.into(), b.into());
            for label in [&a, &b] {
                if !elements.contains(label) {
                    return Err(invalid(format!(
                        "order pair ({a}, {b}) uses '{label}', which is not an element"
                    )));
                }
            }
            order_map.entry(a).or_default().insert(b);
        }

        let mut implication_map: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for ((a, b), c) in implication {
            let (a, b, c) = (a.into(), b.into(), c.into());
            for label in [&a, &b, &c] {
                if !elements.contains(label) {
                    return Err(invalid(format!(
                        "implication ({a}, {b}) -> {c} uses '{label}', which is not an element"
                    )));
                }
            }
            implication_map.entry(a).or_default().insert(b, c);
        }

        let mut lattice = Lattice {
            name: name.clone(),
            elements,
            order: order_map,
            implication: implication_map,
            top: String::new(),
            bottom: String::new(),
        };

        for a in &lattice.elements {
            for b in &lattice.elements {
                lattice
                    .meet(a, b)
                    .and_then(|_| lattice.join(a, b))
                    .map_err(|e| invalid(e.to_string()))?;
            }
        }

        let (bottom, top) = lattice.bounds().map_err(|e| invalid(e.to_string()))?;
        lattice.bottom = bottom;
        lattice.top = top;

        debug!(
            lattice = %lattice.name,
            elements = lattice.elements.len(),
            top = %lattice.top,
            bottom = %lattice.bottom,
            "constructed lattice"
        );
        Ok(lattice)
    }

    /// Fold meet and join over all elements.
    fn bounds(&self) -> AlgebraResult<(String, String)> {
        let mut iter = self.elements.iter();
        let first = match iter.next() {
            Some(first) => first.as_str(),
            None => {
                return Err(AlgebraError::InvalidLattice {
                    name: self.name.clone(),
                    reason: "lattice has no elements".to_string(),
                })
            }
        };

        let mut bottom = first;
        let mut top = first;
        for x in iter {
            bottom = self.meet(bottom, x)?;
            top = self.join(top, x)?;
        }
        Ok((bottom.to_string(), top.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &IndexSet<String> {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.elements.contains(label)
    }

    /// The greatest element.
    pub fn top(&self) -> &str {
        &self.top
    }

    /// The least element.
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    /// `a ≤ b` according to the supplied order pairs.
    pub fn is_less_than_or_equal(&self, a: &str, b: &str) -> bool {
        self.order.get(a).is_some_and(|above| above.contains(b))
    }

    /// All `(a, b)` with `a ≤ b`.
    pub fn order_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .flat_map(|(a, above)| above.iter().map(move |b| (a.as_str(), b.as_str())))
    }

    /// All defined `((a, b), a ⇒ b)` entries.
    pub fn implication_entries(&self) -> impl Iterator<Item = ((&str, &str), &str)> + '_ {
        self.implication.iter().flat_map(|(a, row)| {
            row.iter()
                .map(move |(b, c)| ((a.as_str(), b.as_str()), c.as_str()))
        })
    }

    fn check_element(&self, label: &str) -> AlgebraResult<()> {
        if self.contains(label) {
            Ok(())
        } else {
            Err(AlgebraError::UnknownElement {
                lattice: self.name.clone(),
                element: label.to_string(),
            })
        }
    }

    /// Greatest lower bound of `a` and `b`.
    pub fn meet(&self, a: &str, b: &str) -> AlgebraResult<&str> {
        self.check_element(a)?;
        self.check_element(b)?;
        let lower: Vec<&str> = self
            .elements
            .iter()
            .map(String::as_str)
            .filter(|x| self.is_less_than_or_equal(x, a) && self.is_less_than_or_equal(x, b))
            .collect();
        self.extremal(&lower, LatticeOp::Meet, a, b)
    }

    /// Least upper bound of `a` and `b`.
    pub fn join(&self, a: &str, b: &str) -> AlgebraResult<&str> {
        self.check_element(a)?;
        self.check_element(b)?;
        let upper: Vec<&str> = self
            .elements
            .iter()
            .map(String::as_str)
            .filter(|x| self.is_less_than_or_equal(a, x) && self.is_less_than_or_equal(b, x))
            .collect();
        self.extremal(&upper, LatticeOp::Join, a, b)
    }

    /// Pick the single greatest lower bound (meet) or least upper bound (join)
    /// from a candidate set.
    fn extremal<'a>(
        &self,
        bounds: &[&'a str],
        op: LatticeOp,
        a: &str,
        b: &str,
    ) -> AlgebraResult<&'a str> {
        if bounds.is_empty() {
            return Err(AlgebraError::MissingBound {
                lattice: self.name.clone(),
                op,
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        let mut candidates = bounds.iter().copied().filter(|x| {
            bounds.iter().all(|y| match op {
                LatticeOp::Meet => self.is_less_than_or_equal(y, x),
                LatticeOp::Join => self.is_less_than_or_equal(x, y),
            })
        });

        match (candidates.next(), candidates.next()) {
            (Some(found), None) => Ok(found),
            _ => Err(AlgebraError::AmbiguousBound {
                lattice: self.name.clone(),
                op,
                a: a.to_string(),
                b: b.to_string(),
            }),
        }
    }

    /// Meet of a collection; the empty meet is top.
    pub fn meet_set<I>(&self, items: I) -> AlgebraResult<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut acc = self.top();
        for item in items {
            acc = self.meet(acc, item.as_ref())?;
        }
        Ok(acc)
    }

    /// Join of a collection; the empty join is bottom.
    pub fn join_set<I>(&self, items: I) -> AlgebraResult<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut acc = self.bottom();
        for item in items {
            acc = self.join(acc, item.as_ref())?;
        }
        Ok(acc)
    }

    /// Table lookup of `a ⇒ b`, `None` when the entry is absent.
    pub fn implication(&self, a: &str, b: &str) -> Option<&str> {
        self.implication
            .get(a)
            .and_then(|row| row.get(b))
            .map(String::as_str)
    }

    /// Like [`Lattice::implication`], but an absent entry is an error.
    pub fn implies(&self, a: &str, b: &str) -> AlgebraResult<&str> {
        self.implication(a, b)
            .ok_or_else(|| AlgebraError::UndefinedImplication {
                lattice: self.name.clone(),
                antecedent: a.to_string(),
                consequent: b.to_string(),
            })
    }
}
