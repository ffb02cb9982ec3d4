//! Command implementations. Each renders its result as a string so the
//! binary, the REPL and the tests share one code path.

use anyhow::{anyhow, Context, Result};
use colored::*;
use serde_json::json;
use std::fmt::Write;

use twistlogic_infer::{check_validity, evaluate_checked, Model, ValidityReport, World};
use twistlogic_ir::{parse_with, Dialect, Formula};

use crate::cli::OutputFormat;
use crate::loader::{LatticeDef, Workspace};
use crate::output::{format_syntax_error, verdict_mark};

/// Parse `text`, turning a syntax error into a message with a caret line.
pub fn parse_formula(text: &str, dialect: Dialect) -> Result<Formula> {
    parse_with(text, dialect).map_err(|e| anyhow!(format_syntax_error(text, &e)))
}

fn join(items: impl IntoIterator<Item = String>) -> String {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

pub fn render_parse(formula: &Formula, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "formula": formula.to_string(),
            "ast": formula,
            "atoms": formula.atoms(),
            "actions": formula.actions(),
            "modal_depth": formula.modal_depth(),
            "size": formula.size(),
            "dialect": formula.required_dialect(),
        })),
        OutputFormat::Text => {
            let mut output = String::new();
            writeln!(&mut output, "Formula: {}", formula.to_string().cyan())?;
            writeln!(&mut output, "  Atoms: {}", join(formula.atoms()))?;
            writeln!(&mut output, "  Actions: {}", join(formula.actions()))?;
            writeln!(&mut output, "  Modal depth: {}", formula.modal_depth())?;
            writeln!(&mut output, "  Size: {}", formula.size())?;
            write!(&mut output, "  Dialect: {}", formula.required_dialect())?;
            Ok(output)
        }
    }
}

pub fn parse_command(text: &str, dialect: Dialect, format: OutputFormat) -> Result<String> {
    let formula = parse_formula(text, dialect)?;
    render_parse(&formula, format)
}

pub fn render_eval(
    formula: &Formula,
    model: &Model,
    world: &World,
    format: OutputFormat,
) -> Result<String> {
    let value = evaluate_checked(formula, model, world)?;
    let holds = value == model.twist().top();
    match format {
        OutputFormat::Json => to_json(&json!({
            "formula": formula.to_string(),
            "model": model.name(),
            "world": world.long_name(),
            "short_name": world.short_name(),
            "value": value,
            "holds": holds,
        })),
        OutputFormat::Text => Ok(format!(
            "{} {} at {}: {}",
            verdict_mark(holds),
            formula,
            world,
            value.to_string().bold()
        )),
    }
}

pub fn eval_command(
    workspace: &Workspace,
    text: &str,
    model: Option<&str>,
    world: &str,
    dialect: Dialect,
    format: OutputFormat,
) -> Result<String> {
    let formula = parse_formula(text, dialect)?;
    let model = workspace.select_model(model)?;
    let world = model.resolve_world(world)?;
    render_eval(&formula, model, world, format)
}

pub fn render_validity(report: &ValidityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            let mut output = String::new();
            writeln!(
                &mut output,
                "Validity of {} in {}",
                report.formula.cyan(),
                report.model.bold()
            )?;
            for value in &report.per_world {
                writeln!(
                    &mut output,
                    "  {} {} ({}): {}",
                    verdict_mark(value.holds),
                    value.short_name,
                    value.world,
                    value.value
                )?;
            }
            writeln!(&mut output, "Aggregate: {}", report.aggregate)?;
            if report.valid {
                write!(&mut output, "{}", "VALID".green().bold())?;
            } else {
                write!(
                    &mut output,
                    "{} (fails at {})",
                    "NOT VALID".red().bold(),
                    join(report.failed_worlds.iter().cloned())
                )?;
            }
            Ok(output)
        }
    }
}

pub fn validity_command(
    workspace: &Workspace,
    text: &str,
    model: Option<&str>,
    dialect: Dialect,
    format: OutputFormat,
) -> Result<String> {
    let formula = parse_formula(text, dialect)?;
    let model = workspace.select_model(model)?;
    let report = check_validity(&formula, model)?;
    render_validity(&report, format)
}

pub fn inspect_command(workspace: &Workspace, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let lattices: Vec<_> = workspace
                .lattices()
                .map(|l| {
                    let def = LatticeDef::from(l);
                    json!({
                        "name": def.name,
                        "elements": def.elements,
                        "relations": def.relations,
                        "implication_map": def.implication_map,
                        "top": l.top(),
                        "bottom": l.bottom(),
                    })
                })
                .collect();
            let residuated: Vec<_> = workspace
                .residuated_lattices()
                .map(|rl| json!({ "name": rl.name(), "lattice": rl.lattice().name() }))
                .collect();
            let twists: Vec<_> = workspace
                .twist_structures()
                .map(|(name, t)| {
                    json!({
                        "name": name,
                        "residuated_lattice": t.residuated_lattice().name(),
                        "carrier_size": t.elements().len(),
                        "top": t.top(),
                        "bottom": t.bottom(),
                    })
                })
                .collect();
            let worlds: Vec<_> = workspace
                .worlds()
                .map(|w| {
                    json!({
                        "world_name": w.long_name(),
                        "short_world_name": w.short_name(),
                        "assignments": w.assignments(),
                    })
                })
                .collect();
            let models: Vec<_> = workspace
                .models()
                .map(|m| {
                    json!({
                        "model_name": m.name(),
                        "description": m.description(),
                        "worlds": m.worlds().map(|w| w.long_name()).collect::<Vec<_>>(),
                        "actions": m.actions(),
                        "props": m.props(),
                        "transitions": m.transition_count(),
                    })
                })
                .collect();
            to_json(&json!({
                "lattices": lattices,
                "residuated_lattices": residuated,
                "twist_structures": twists,
                "worlds": worlds,
                "models": models,
            }))
        }
        OutputFormat::Text => {
            let mut output = String::new();
            writeln!(&mut output, "{}", "Lattices:".bold())?;
            for l in workspace.lattices() {
                writeln!(
                    &mut output,
                    "  {} {{{}}} top={} bottom={}",
                    l.name(),
                    join(l.elements().iter().cloned()),
                    l.top(),
                    l.bottom()
                )?;
            }
            writeln!(&mut output, "{}", "Residuated lattices:".bold())?;
            for rl in workspace.residuated_lattices() {
                writeln!(&mut output, "  {} over {}", rl.name(), rl.lattice().name())?;
            }
            writeln!(&mut output, "{}", "Twist structures:".bold())?;
            for (name, t) in workspace.twist_structures() {
                writeln!(
                    &mut output,
                    "  {} over {}: {} elements, top={} bottom={}",
                    name,
                    t.residuated_lattice().name(),
                    t.elements().len(),
                    t.top(),
                    t.bottom()
                )?;
            }
            writeln!(&mut output, "{}", "Worlds:".bold())?;
            for w in workspace.worlds() {
                let assignments = w.assignments().iter().map(|(k, v)| format!("{k}={v}"));
                writeln!(&mut output, "  {}: {}", w, join(assignments))?;
            }
            write!(&mut output, "{}", "Models:".bold())?;
            for m in workspace.models() {
                write!(
                    &mut output,
                    "\n  {}: {} worlds, actions {{{}}}, {} transitions",
                    m.name(),
                    m.world_count(),
                    join(m.actions().iter().cloned()),
                    m.transition_count()
                )?;
                if let Some(description) = m.description() {
                    write!(&mut output, " - {}", description)?;
                }
            }
            Ok(output)
        }
    }
}
