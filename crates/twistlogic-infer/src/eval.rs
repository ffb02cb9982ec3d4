//! Evaluation of formulas to truth pairs.

use tracing::trace;
use twistlogic_algebra::{TruthPair, TwistStructure};
use twistlogic_ir::Formula;

use crate::error::{InferError, InferResult};
use crate::model::Model;
use crate::world::World;

/// Anything that evaluates to a truth pair at a world of a model.
///
/// Evaluation is a pure walk: nothing in the model, the world or the twist
/// structure is mutated, so shared references may be evaluated against from
/// several threads at once.
pub trait Evaluate {
    fn evaluate(
        &self,
        model: &Model,
        world: &World,
        twist: &TwistStructure,
    ) -> InferResult<TruthPair>;
}

impl Evaluate for Formula {
    fn evaluate(
        &self,
        model: &Model,
        world: &World,
        twist: &TwistStructure,
    ) -> InferResult<TruthPair> {
        eval(self, model, world, twist)
    }
}

fn eval(
    formula: &Formula,
    model: &Model,
    world: &World,
    twist: &TwistStructure,
) -> InferResult<TruthPair> {
    let value = match formula {
        Formula::Top => twist.top(),
        Formula::Bottom => twist.bottom(),
        Formula::Atom(name) => world.value_of(name)?,
        Formula::Not(child) => twist.negation(&eval(child, model, world, twist)?),
        Formula::And(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            twist.weak_meet(&l, &r)?
        }
        Formula::Or(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            twist.weak_join(&l, &r)?
        }
        Formula::MaterialImplies(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            twist.weak_join(&twist.negation(&l), &r)?
        }
        Formula::MaterialIff(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            let forward = twist.weak_join(&twist.negation(&l), &r)?;
            let backward = twist.weak_join(&twist.negation(&r), &l)?;
            twist.weak_meet(&forward, &backward)?
        }
        Formula::Implies(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            twist.implication(&l, &r)?
        }
        Formula::Iff(l, r) => {
            let (l, r) = operands(l, r, model, world, twist)?;
            let forward = twist.implication(&l, &r)?;
            let backward = twist.implication(&r, &l)?;
            twist.weak_meet(&forward, &backward)?
        }
        Formula::Diamond { action, child } => diamond(action, child, false, model, world, twist)?,
        // [a]P = ~<a>~P
        Formula::Box { action, child } => {
            twist.negation(&diamond(action, child, true, model, world, twist)?)
        }
    };

    trace!(
        formula = %formula,
        world = %world.long_name(),
        value = %value,
        "evaluated"
    );
    Ok(value)
}

/// Left operand first, then right.
fn operands(
    left: &Formula,
    right: &Formula,
    model: &Model,
    world: &World,
    twist: &TwistStructure,
) -> InferResult<(TruthPair, TruthPair)> {
    let l = eval(left, model, world, twist)?;
    let r = eval(right, model, world, twist)?;
    Ok((l, r))
}

/// Weak join over all stored `action`-successors of `world` of
/// `residue_meet(weight, value at successor)`. With `negate_child` the
/// successor value is negated first, which is the inner `~` of Box.
fn diamond(
    action: &str,
    child: &Formula,
    negate_child: bool,
    model: &Model,
    world: &World,
    twist: &TwistStructure,
) -> InferResult<TruthPair> {
    if !model.has_action(action) {
        return Err(InferError::UndefinedAction {
            action: action.to_string(),
            model: model.name().to_string(),
        });
    }

    let mut contributions = Vec::new();
    for (target, weight) in model.successors(action, world.long_name()) {
        let successor = model.world(target).ok_or_else(|| InferError::UnknownWorld {
            world: target.to_string(),
            model: model.name().to_string(),
        })?;

        let mut value = eval(child, model, successor, twist)?;
        if negate_child {
            value = twist.negation(&value);
        }
        let contribution = twist.residue_meet(weight, &value)?;
        trace!(
            action,
            from = %world.long_name(),
            to = target,
            weight = %weight,
            value = %value,
            contribution = %contribution,
            "diamond successor"
        );
        contributions.push(contribution);
    }

    Ok(twist.weak_join_set(&contributions)?)
}
