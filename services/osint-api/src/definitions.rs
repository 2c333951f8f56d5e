//! Indicator definitions loaded at startup

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ApiError;

const BUNDLED_DEFINITIONS: &str = include_str!("../data/indicator_definitions.json");

/// A single indicator definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pir: String,
    pub coa: String,
    #[serde(default)]
    pub data_signals: Vec<String>,
}

/// Definitions files may write `pir` as `"1"` or `1`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct DefinitionsFile {
    #[serde(default)]
    indicators: Vec<IndicatorDefinition>,
}

/// Definitions keyed by id, listed in file order
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    definitions: Vec<IndicatorDefinition>,
    by_id: HashMap<String, usize>,
}

impl DefinitionSet {
    /// Build a set, rejecting duplicate or empty ids
    pub fn new(definitions: Vec<IndicatorDefinition>) -> crate::Result<Self> {
        let mut by_id = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if definition.id.trim().is_empty() {
                return Err(ApiError::Definitions(format!(
                    "indicator at position {} has an empty id",
                    index
                )));
            }
            if by_id.insert(definition.id.clone(), index).is_some() {
                return Err(ApiError::Definitions(format!(
                    "duplicate indicator id {}",
                    definition.id
                )));
            }
        }
        Ok(Self { definitions, by_id })
    }

    /// Parse a `{ "indicators": [...] }` document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let file: DefinitionsFile = serde_json::from_str(json)?;
        Self::new(file.indicators)
    }

    /// The demo set shipped with the service
    pub fn bundled() -> crate::Result<Self> {
        Self::from_json(BUNDLED_DEFINITIONS)
    }

    pub fn get(&self, id: &str) -> Option<&IndicatorDefinition> {
        self.by_id.get(id).map(|&index| &self.definitions[index])
    }

    pub fn all(&self) -> &[IndicatorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Load definitions from a JSON file
pub fn load_definitions(path: &Path) -> crate::Result<DefinitionSet> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::Config(format!(
            "Failed to read definitions file {:?}: {}",
            path, e
        ))
    })?;
    let set = DefinitionSet::from_json(&content)?;
    tracing::debug!("Loaded {} indicator definitions from {:?}", set.len(), path);
    Ok(set)
}
