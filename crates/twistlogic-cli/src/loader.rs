//! Workspace documents: lattices, residuated lattices, twist structures,
//! worlds and models read from one JSON or YAML file.
//!
//! Objects reference each other by name and are resolved in dependency
//! order. Twist structures and worlds are shared through `Arc`, so every
//! model built over the same twist structure sees the same instance.

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use twistlogic_algebra::{Lattice, ResiduatedLattice, TruthPair, TwistStructure};
use twistlogic_infer::{Model, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceDocument {
    pub lattices: Vec<LatticeDef>,
    pub residuated_lattices: Vec<ResiduatedLatticeDef>,
    pub twist_structures: Vec<TwistStructureDef>,
    pub worlds: Vec<WorldDef>,
    pub models: Vec<ModelDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeDef {
    pub name: String,
    pub elements: Vec<String>,
    /// Order pairs `[a, b]` meaning `a <= b`.
    #[serde(default)]
    pub relations: Vec<(String, String)>,
    /// Keys are pair literals such as `"(a, b)"` or `"('a', 'b')"`.
    #[serde(default)]
    pub implication_map: IndexMap<String, String>,
}

impl From<&Lattice> for LatticeDef {
    fn from(lattice: &Lattice) -> Self {
        LatticeDef {
            name: lattice.name().to_string(),
            elements: lattice.elements().iter().cloned().collect(),
            relations: lattice
                .order_pairs()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            implication_map: lattice
                .implication_entries()
                .map(|(key, value)| (TruthPair::from(key).to_string(), value.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResiduatedLatticeDef {
    pub name_residuated_lattice: String,
    pub name_lattice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistStructureDef {
    pub name: String,
    pub residuated_lattice_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldDef {
    pub world_name: String,
    /// Defaults to `world_name`.
    #[serde(default)]
    pub short_world_name: Option<String>,
    pub twist_structure_name: String,
    #[serde(default)]
    pub assignments: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    pub model_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub twist_structure_name: String,
    /// Long names of member worlds.
    #[serde(default)]
    pub worlds: Vec<String>,
    /// action -> source -> targets
    #[serde(default)]
    pub accessibility_relations: IndexMap<String, IndexMap<String, RelationTargets>>,
    #[serde(default)]
    pub props: Vec<String>,
}

/// Either weighted targets or the legacy list of full-strength targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationTargets {
    Weighted(IndexMap<String, TruthPair>),
    Targets(Vec<String>),
}

impl WorkspaceDocument {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON workspace document")
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse YAML workspace document")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read workspace: {}", path.display()))?;
        let document = match DocumentFormat::from_path(path) {
            DocumentFormat::Json => Self::from_json_str(&content),
            DocumentFormat::Yaml => Self::from_yaml_str(&content),
        };
        document.with_context(|| format!("Invalid workspace document: {}", path.display()))
    }
}

/// The resolved objects of a workspace document.
#[derive(Debug, Default)]
pub struct Workspace {
    lattices: IndexMap<String, Lattice>,
    residuated_lattices: IndexMap<String, ResiduatedLattice>,
    twist_structures: IndexMap<String, Arc<TwistStructure>>,
    worlds: IndexMap<String, Arc<World>>,
    models: IndexMap<String, Model>,
}

impl Workspace {
    pub fn load(path: &Path) -> Result<Self> {
        let document = WorkspaceDocument::from_path(path)?;
        Self::from_document(&document)
            .with_context(|| format!("Failed to load workspace: {}", path.display()))
    }

    pub fn from_document(document: &WorkspaceDocument) -> Result<Self> {
        let mut ws = Workspace::default();

        for def in &document.lattices {
            let lattice = build_lattice(def)?;
            insert_unique(&mut ws.lattices, "lattice", &def.name, lattice)?;
        }

        for def in &document.residuated_lattices {
            let lattice = ws.lattices.get(&def.name_lattice).ok_or_else(|| {
                anyhow!(
                    "Residuated lattice '{}' references unknown lattice '{}'",
                    def.name_residuated_lattice,
                    def.name_lattice
                )
            })?;
            let rl = ResiduatedLattice::new(def.name_residuated_lattice.clone(), lattice.clone());
            insert_unique(
                &mut ws.residuated_lattices,
                "residuated lattice",
                &def.name_residuated_lattice,
                rl,
            )?;
        }

        for def in &document.twist_structures {
            let rl = ws
                .residuated_lattices
                .get(&def.residuated_lattice_name)
                .ok_or_else(|| {
                    anyhow!(
                        "Twist structure '{}' references unknown residuated lattice '{}'",
                        def.name,
                        def.residuated_lattice_name
                    )
                })?;
            let twist = Arc::new(TwistStructure::new(rl.clone()).with_name(def.name.clone()));
            insert_unique(&mut ws.twist_structures, "twist structure", &def.name, twist)?;
        }

        for def in &document.worlds {
            let twist = ws.twist(&def.twist_structure_name).with_context(|| {
                format!("World '{}' has no usable twist structure", def.world_name)
            })?;
            let short = def.short_world_name.as_deref().unwrap_or(&def.world_name);
            let world = World::from_assignments(
                def.world_name.clone(),
                short,
                twist.clone(),
                def.assignments.iter().map(|(k, v)| (k.clone(), v.clone())),
            );
            insert_unique(&mut ws.worlds, "world", &def.world_name, Arc::new(world))?;
        }

        for def in &document.models {
            let model = ws
                .build_model(def)
                .with_context(|| format!("Failed to build model '{}'", def.model_name))?;
            insert_unique(&mut ws.models, "model", &def.model_name, model)?;
        }

        tracing::debug!(
            lattices = ws.lattices.len(),
            twist_structures = ws.twist_structures.len(),
            worlds = ws.worlds.len(),
            models = ws.models.len(),
            "workspace resolved"
        );
        Ok(ws)
    }

    fn build_model(&self, def: &ModelDef) -> Result<Model> {
        let twist = self.twist(&def.twist_structure_name)?;
        let mut builder = Model::builder(def.model_name.clone(), twist.clone());
        if let Some(description) = &def.description {
            builder = builder.description(description.clone());
        }
        for name in &def.worlds {
            let world = self
                .worlds
                .get(name)
                .ok_or_else(|| anyhow!("Unknown world '{}'", name))?;
            builder = builder.shared_world(world.clone());
        }
        for prop in &def.props {
            builder = builder.prop(prop.clone());
        }
        for (action, sources) in &def.accessibility_relations {
            builder = builder.action(action.clone());
            for (source, targets) in sources {
                match targets {
                    RelationTargets::Weighted(weighted) => {
                        for (target, weight) in weighted {
                            builder = builder.relate_weighted(
                                action.clone(),
                                source.clone(),
                                target.clone(),
                                weight.clone(),
                            );
                        }
                    }
                    RelationTargets::Targets(list) => {
                        for target in list {
                            builder = builder.relate(action.clone(), source.clone(), target.clone());
                        }
                    }
                }
            }
        }
        Ok(builder.build()?)
    }

    pub fn lattices(&self) -> impl Iterator<Item = &Lattice> + '_ {
        self.lattices.values()
    }

    pub fn residuated_lattices(&self) -> impl Iterator<Item = &ResiduatedLattice> + '_ {
        self.residuated_lattices.values()
    }

    pub fn twist_structures(&self) -> impl Iterator<Item = (&str, &Arc<TwistStructure>)> + '_ {
        self.twist_structures.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn worlds(&self) -> impl Iterator<Item = &Arc<World>> + '_ {
        self.worlds.values()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> + '_ {
        self.models.values()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn twist(&self, name: &str) -> Result<&Arc<TwistStructure>> {
        self.twist_structures
            .get(name)
            .ok_or_else(|| anyhow!("Unknown twist structure '{}'", name))
    }

    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| anyhow!("Unknown model '{}'", name))
    }

    /// The named model, or the only model when no name is given.
    pub fn select_model(&self, name: Option<&str>) -> Result<&Model> {
        match name {
            Some(name) => self.model(name),
            None => match self.models.len() {
                0 => bail!("The workspace defines no models"),
                1 => Ok(&self.models[0]),
                _ => bail!(
                    "The workspace defines several models ({}); pick one with --model",
                    self.models.keys().cloned().collect::<Vec<_>>().join(", ")
                ),
            },
        }
    }
}

fn insert_unique<T>(map: &mut IndexMap<String, T>, kind: &str, name: &str, value: T) -> Result<()> {
    if map.contains_key(name) {
        bail!("Duplicate {} '{}'", kind, name);
    }
    map.insert(name.to_string(), value);
    Ok(())
}

fn build_lattice(def: &LatticeDef) -> Result<Lattice> {
    let mut implication = Vec::with_capacity(def.implication_map.len());
    for (key, value) in &def.implication_map {
        let pair: TruthPair = key.parse().with_context(|| {
            format!(
                "Lattice '{}': implication key '{}' is not a pair of labels",
                def.name, key
            )
        })?;
        implication.push(((pair.t, pair.f), value.clone()));
    }
    Lattice::new(
        def.name.clone(),
        def.elements.clone(),
        def.relations.clone(),
        implication,
    )
    .with_context(|| format!("Failed to build lattice '{}'", def.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLEAN_JSON: &str = r#"{
        "lattices": [{
            "name": "Bool",
            "elements": ["0", "1"],
            "relations": [["0", "0"], ["1", "1"], ["0", "1"]],
            "implication_map": {
                "('0', '0')": "1", "('0', '1')": "1",
                "('1', '0')": "0", "('1', '1')": "1"
            }
        }],
        "residuated_lattices": [{"name_residuated_lattice": "BoolRL", "name_lattice": "Bool"}],
        "twist_structures": [{"name": "T", "residuated_lattice_name": "BoolRL"}],
        "worlds": [
            {"world_name": "world_1", "short_world_name": "w1",
             "twist_structure_name": "T", "assignments": {"p": "(1, 0)"}},
            {"world_name": "world_2", "twist_structure_name": "T",
             "assignments": {"q": "(1, 0)"}}
        ],
        "models": [{
            "model_name": "PLTS",
            "twist_structure_name": "T",
            "worlds": ["world_1", "world_2"],
            "accessibility_relations": {
                "a": {"world_1": {"world_2": ["1", "0"]}},
                "b": {"world_2": ["world_1"]}
            },
            "props": ["p", "q"]
        }]
    }"#;

    fn boolean_doc() -> WorkspaceDocument {
        WorkspaceDocument::from_json_str(BOOLEAN_JSON).unwrap()
    }

    #[test]
    fn test_lattice_definition_rebuilds_the_same_lattice() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        let lattice = ws.lattices().next().unwrap();
        let def = LatticeDef::from(lattice);
        assert_eq!(def.implication_map["(1, 0)"], "0");
        assert!(def.relations.contains(&("0".to_string(), "1".to_string())));
        assert_eq!(&build_lattice(&def).unwrap(), lattice);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("ws.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("ws.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("ws.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("ws")), DocumentFormat::Json);
    }

    #[test]
    fn test_resolves_all_sections() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        assert_eq!(ws.lattices().count(), 1);
        assert_eq!(ws.residuated_lattices().count(), 1);
        assert_eq!(ws.twist_structures().count(), 1);
        assert_eq!(ws.worlds().count(), 2);

        let model = ws.model("PLTS").unwrap();
        assert_eq!(model.world_count(), 2);
        assert!(model.has_action("a"));
        assert!(model.has_action("b"));
        assert_eq!(model.transition_count(), 2);
        assert_eq!(
            model.get_relation_weight("a", "world_1", "world_2"),
            TruthPair::new("1", "0")
        );
    }

    #[test]
    fn test_legacy_targets_get_full_weight() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        let model = ws.model("PLTS").unwrap();
        assert_eq!(model.get_relation_weight("b", "world_2", "world_1"), model.twist().top());
    }

    #[test]
    fn test_short_name_defaults_to_long_name() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        let model = ws.model("PLTS").unwrap();
        assert!(model.get_world("w1").is_some());
        assert!(model.get_world("world_2").is_some());
    }

    #[test]
    fn test_worlds_share_the_twist_structure() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        let twist = ws.twist("T").unwrap();
        assert!(ws.worlds().all(|w| Arc::ptr_eq(w.twist(), twist)));
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r#"
lattices:
  - name: Chain
    elements: ["0", "h", "1"]
    relations: [["0", "0"], ["h", "h"], ["1", "1"], ["0", "h"], ["h", "1"], ["0", "1"]]
    implication_map:
      "(0, 0)": "1"
      "(0, h)": "1"
      "(0, 1)": "1"
      "(h, 0)": "0"
      "(h, h)": "1"
      "(h, 1)": "1"
      "(1, 0)": "0"
      "(1, h)": "h"
      "(1, 1)": "1"
residuated_lattices:
  - {name_residuated_lattice: ChainRL, name_lattice: Chain}
twist_structures:
  - {name: T3, residuated_lattice_name: ChainRL}
"#;
        let doc = WorkspaceDocument::from_yaml_str(yaml).unwrap();
        let ws = Workspace::from_document(&doc).unwrap();
        let twist = ws.twist("T3").unwrap();
        assert_eq!(twist.elements().len(), 9);
        assert_eq!(ws.model_count(), 0);
        assert!(ws.select_model(None).is_err());
    }

    #[test]
    fn test_select_model() {
        let ws = Workspace::from_document(&boolean_doc()).unwrap();
        assert_eq!(ws.select_model(None).unwrap().name(), "PLTS");
        assert!(ws.select_model(Some("Other")).is_err());
    }

    #[test]
    fn test_unknown_references_fail() {
        let mut doc = boolean_doc();
        doc.twist_structures[0].residuated_lattice_name = "Missing".to_string();
        let err = Workspace::from_document(&doc).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown residuated lattice 'Missing'"));

        let mut doc = boolean_doc();
        doc.models[0].worlds.push("world_9".to_string());
        let err = Workspace::from_document(&doc).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown world 'world_9'"));
    }

    #[test]
    fn test_duplicate_names_fail() {
        let mut doc = boolean_doc();
        let copy = doc.lattices[0].clone();
        doc.lattices.push(copy);
        let err = Workspace::from_document(&doc).unwrap_err();
        assert!(err.to_string().contains("Duplicate lattice 'Bool'"));
    }

    #[test]
    fn test_invalid_lattice_reports_name() {
        let mut doc = boolean_doc();
        doc.lattices[0].relations = vec![("0".into(), "0".into()), ("1".into(), "1".into())];
        let err = Workspace::from_document(&doc).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to build lattice 'Bool'"));
    }

    #[test]
    fn test_weight_outside_carrier_fails() {
        let mut doc = boolean_doc();
        let mut weighted = IndexMap::new();
        weighted.insert("world_1".to_string(), TruthPair::new("1", "x"));
        doc.models[0]
            .accessibility_relations
            .get_mut("a")
            .unwrap()
            .insert("world_2".to_string(), RelationTargets::Weighted(weighted));
        let err = Workspace::from_document(&doc).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to build model 'PLTS'"));
    }
}
