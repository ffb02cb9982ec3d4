//! Weighted labelled transition systems over a twist structure.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;
use twistlogic_algebra::{TruthPair, TwistStructure};

use crate::error::{InferError, InferResult};
use crate::world::World;

/// `target long_name -> weight`
pub type Successors = IndexMap<String, TruthPair>;

/// A model `(W, R, V)`: worlds with their valuations and, per action, a
/// weighted accessibility relation.
///
/// Relations are keyed by world `long_name`. A missing entry means there is no
/// transition, which is different from a transition of weight `(bottom, top)`.
/// A `Model` is immutable once built.
#[derive(Clone, Debug)]
pub struct Model {
    name: String,
    description: Option<String>,
    twist: Arc<TwistStructure>,
    worlds: IndexMap<String, Arc<World>>,
    actions: IndexSet<String>,
    props: IndexSet<String>,
    relations: IndexMap<String, IndexMap<String, Successors>>,
}

impl Model {
    pub fn builder(name: impl Into<String>, twist: Arc<TwistStructure>) -> ModelBuilder {
        ModelBuilder::new(name, twist)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn twist(&self) -> &Arc<TwistStructure> {
        &self.twist
    }

    pub fn actions(&self) -> &IndexSet<String> {
        &self.actions
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    pub fn props(&self) -> &IndexSet<String> {
        &self.props
    }

    /// Worlds in insertion order.
    pub fn worlds(&self) -> impl Iterator<Item = &Arc<World>> + '_ {
        self.worlds.values()
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    /// Look up a world by its identity.
    pub fn world(&self, long_name: &str) -> Option<&Arc<World>> {
        self.worlds.get(long_name)
    }

    /// Look up a world by its display name; the first match wins.
    pub fn get_world(&self, short_name: &str) -> Option<&Arc<World>> {
        self.worlds.values().find(|w| w.short_name() == short_name)
    }

    /// Resolve a world by long name, falling back to the short name.
    pub fn resolve_world(&self, name: &str) -> InferResult<&Arc<World>> {
        self.world(name)
            .or_else(|| self.get_world(name))
            .ok_or_else(|| InferError::UnknownWorld {
                world: name.to_string(),
                model: self.name.clone(),
            })
    }

    /// Stored transitions out of `source` under `action`. Empty when there are
    /// none.
    pub fn successors(
        &self,
        action: &str,
        source: &str,
    ) -> impl Iterator<Item = (&str, &TruthPair)> + '_ {
        self.relations
            .get(action)
            .and_then(|by_source| by_source.get(source))
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(t, w)| (t.as_str(), w)))
    }

    /// The weight of `source -action-> target`, or `(bottom, top)` when there
    /// is no such transition.
    pub fn get_relation_weight(&self, action: &str, source: &str, target: &str) -> TruthPair {
        self.relations
            .get(action)
            .and_then(|by_source| by_source.get(source))
            .and_then(|targets| targets.get(target))
            .cloned()
            .unwrap_or_else(|| self.twist.bottom())
    }

    /// All stored transitions as `(action, source, target, weight)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str, &str, &TruthPair)> + '_ {
        self.relations.iter().flat_map(|(action, by_source)| {
            by_source.iter().flat_map(move |(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, w)| (action.as_str(), source.as_str(), target.as_str(), w))
            })
        })
    }

    pub fn transition_count(&self) -> usize {
        self.transitions().count()
    }
}

/// A transition waiting to be validated. `None` means full strength.
#[derive(Clone, Debug)]
struct PendingRelation {
    action: String,
    source: String,
    target: String,
    weight: Option<TruthPair>,
}

/// Fluent builder for [`Model`]; all validation happens in [`ModelBuilder::build`].
///
/// ```rust
/// use std::sync::Arc;
/// use twistlogic_algebra::{boolean_lattice, ResiduatedLattice, TruthPair, TwistStructure};
/// use twistlogic_infer::{Model, World};
///
/// let twist = Arc::new(TwistStructure::new(ResiduatedLattice::from_lattice(boolean_lattice())));
/// let model = Model::builder("M", twist.clone())
///     .world(World::new("world_1", "w1", twist.clone()))
///     .world(World::new("world_2", "w2", twist.clone()).with_assignment("q", "(1, 0)"))
///     .relate_weighted("a", "world_1", "world_2", TruthPair::new("1", "0"))
///     .build()
///     .unwrap();
/// assert!(model.has_action("a"));
/// assert_eq!(model.get_relation_weight("a", "world_2", "world_1"), TruthPair::new("0", "1"));
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    name: String,
    description: Option<String>,
    twist: Arc<TwistStructure>,
    worlds: Vec<Arc<World>>,
    actions: IndexSet<String>,
    props: IndexSet<String>,
    relations: Vec<PendingRelation>,
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>, twist: Arc<TwistStructure>) -> Self {
        ModelBuilder {
            name: name.into(),
            description: None,
            twist,
            worlds: Vec::new(),
            actions: IndexSet::new(),
            props: IndexSet::new(),
            relations: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn world(self, world: World) -> Self {
        self.shared_world(Arc::new(world))
    }

    /// Add a world that other models may share.
    pub fn shared_world(mut self, world: Arc<World>) -> Self {
        self.worlds.push(world);
        self
    }

    /// Declare an action, even one without transitions.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.insert(action.into());
        self
    }

    pub fn prop(mut self, prop: impl Into<String>) -> Self {
        self.props.insert(prop.into());
        self
    }

    /// Add a full-strength transition, weight `(top, bottom)`.
    pub fn relate(
        self,
        action: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.push_relation(action.into(), source.into(), target.into(), None)
    }

    pub fn relate_weighted(
        self,
        action: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: impl Into<TruthPair>,
    ) -> Self {
        self.push_relation(
            action.into(),
            source.into(),
            target.into(),
            Some(weight.into()),
        )
    }

    fn push_relation(
        mut self,
        action: String,
        source: String,
        target: String,
        weight: Option<TruthPair>,
    ) -> Self {
        self.relations.push(PendingRelation {
            action,
            source,
            target,
            weight,
        });
        self
    }

    pub fn build(self) -> InferResult<Model> {
        let mut worlds: IndexMap<String, Arc<World>> = IndexMap::new();
        for world in self.worlds {
            if !world.twist().same_algebra(&self.twist) {
                return Err(InferError::TwistMismatch {
                    world: world.long_name().to_string(),
                    model: self.name,
                });
            }
            if worlds.contains_key(world.long_name()) {
                return Err(InferError::DuplicateWorld {
                    world: world.long_name().to_string(),
                    model: self.name,
                });
            }
            worlds.insert(world.long_name().to_string(), world);
        }

        let mut actions = self.actions;
        let mut relations: IndexMap<String, IndexMap<String, Successors>> = IndexMap::new();
        for PendingRelation {
            action,
            source,
            target,
            weight,
        } in self.relations
        {
            for endpoint in [&source, &target] {
                if !worlds.contains_key(endpoint) {
                    return Err(InferError::UnknownWorld {
                        world: endpoint.clone(),
                        model: self.name,
                    });
                }
            }

            let weight = weight.unwrap_or_else(|| self.twist.top());
            if !self.twist.contains(&weight) {
                return Err(InferError::WeightOutsideCarrier {
                    action,
                    origin: source,
                    target,
                    weight,
                });
            }

            actions.insert(action.clone());
            relations
                .entry(action)
                .or_default()
                .entry(source)
                .or_default()
                .insert(target, weight);
        }

        let model = Model {
            name: self.name,
            description: self.description,
            twist: self.twist,
            worlds,
            actions,
            props: self.props,
            relations,
        };
        debug!(
            model = %model.name,
            worlds = model.worlds.len(),
            actions = model.actions.len(),
            transitions = model.transition_count(),
            "constructed model"
        );
        Ok(model)
    }
}
