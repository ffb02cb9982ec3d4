//! Checked evaluation and model-wide validity.

use serde::{Deserialize, Serialize};
use tracing::debug;
use twistlogic_algebra::TruthPair;
use twistlogic_ir::Formula;

use crate::error::{InferError, InferResult};
use crate::eval::Evaluate;
use crate::model::Model;
use crate::world::World;

/// Atoms of `formula` that `world` does not assign, in sorted order.
pub fn missing_atoms(formula: &Formula, world: &World) -> Vec<String> {
    formula
        .atoms()
        .into_iter()
        .filter(|atom| !world.defines(atom))
        .collect()
}

/// Evaluate at `world` in the model's own twist structure, after checking
/// that the world assigns every atom the formula uses.
pub fn evaluate_checked(formula: &Formula, model: &Model, world: &World) -> InferResult<TruthPair> {
    let missing = missing_atoms(formula, world);
    if !missing.is_empty() {
        return Err(InferError::MissingAssignments {
            world: world.short_name().to_string(),
            atoms: missing,
        });
    }
    formula.evaluate(model, world, model.twist())
}

/// The value of a formula at one world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldValue {
    pub world: String,
    pub short_name: String,
    pub value: TruthPair,
    /// `value == (top, bottom)`
    pub holds: bool,
}

/// Outcome of [`check_validity`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityReport {
    pub formula: String,
    pub model: String,
    /// Weak meet of all per-world values.
    pub aggregate: TruthPair,
    /// Per-world values in ascending `long_name` order.
    pub per_world: Vec<WorldValue>,
    /// Long names of the worlds where the formula does not hold.
    pub failed_worlds: Vec<String>,
    pub valid: bool,
}

/// Evaluate `formula` at every world of `model`.
///
/// Worlds are visited by ascending `long_name`. A world missing an assignment
/// stops the check with [`InferError::MissingAssignments`]. The formula is
/// valid when the weak meet of all values is `(top, bottom)` and no world
/// failed.
pub fn check_validity(formula: &Formula, model: &Model) -> InferResult<ValidityReport> {
    let twist = model.twist();
    let top = twist.top();

    let mut worlds: Vec<&World> = model.worlds().map(|w| w.as_ref()).collect();
    worlds.sort_by(|a, b| a.long_name().cmp(b.long_name()));

    let mut per_world = Vec::with_capacity(worlds.len());
    let mut failed_worlds = Vec::new();
    for world in worlds {
        let value = evaluate_checked(formula, model, world)?;
        let holds = value == top;
        if !holds {
            failed_worlds.push(world.long_name().to_string());
        }
        per_world.push(WorldValue {
            world: world.long_name().to_string(),
            short_name: world.short_name().to_string(),
            value,
            holds,
        });
    }

    let values: Vec<TruthPair> = per_world.iter().map(|r| r.value.clone()).collect();
    let aggregate = twist.weak_meet_set(&values)?;
    let valid = aggregate == top && failed_worlds.is_empty();

    debug!(
        formula = %formula,
        model = %model.name(),
        aggregate = %aggregate,
        failed = failed_worlds.len(),
        valid,
        "validity check"
    );

    Ok(ValidityReport {
        formula: formula.to_string(),
        model: model.name().to_string(),
        aggregate,
        per_world,
        failed_worlds,
        valid,
    })
}
