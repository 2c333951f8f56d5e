//! Rule engine that scores events against indicator definitions

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::definitions::{DefinitionSet, IndicatorDefinition};

const BASE_CONFIDENCE: f64 = 0.3;
const CONFIDENCE_PER_SIGNAL: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.9;

/// An incoming event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub indicator_id: String,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

fn empty_payload() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Outcome of evaluating one event
///
/// Serializes flat, with `"matched": true` or `"matched": false` alongside the
/// variant's fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Matched {
        indicator_id: String,
        description: String,
        confidence: f64,
        recommended_task: String,
    },
    Unmatched {
        reason: String,
    },
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Evaluation::Matched {
                indicator_id,
                description,
                confidence,
                recommended_task,
            } => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("matched", &true)?;
                map.serialize_entry("indicator_id", indicator_id)?;
                map.serialize_entry("description", description)?;
                map.serialize_entry("confidence", confidence)?;
                map.serialize_entry("recommended_task", recommended_task)?;
                map.end()
            }
            Evaluation::Unmatched { reason } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("matched", &false)?;
                map.serialize_entry("reason", reason)?;
                map.end()
            }
        }
    }
}

impl Evaluation {
    pub fn is_matched(&self) -> bool {
        matches!(self, Evaluation::Matched { .. })
    }
}

/// Evaluates events against a fixed definition set
#[derive(Debug, Clone)]
pub struct RuleEngine {
    definitions: Arc<DefinitionSet>,
}

impl RuleEngine {
    pub fn new(definitions: Arc<DefinitionSet>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &DefinitionSet {
        &self.definitions
    }

    /// Score an event. The payload is accepted but does not affect the score.
    pub fn evaluate(&self, event: &EventRequest) -> Evaluation {
        let Some(definition) = self.definitions.get(&event.indicator_id) else {
            tracing::debug!("Event for unknown indicator {}", event.indicator_id);
            return Evaluation::Unmatched {
                reason: format!("Unknown indicator ID: {}", event.indicator_id),
            };
        };

        let confidence = confidence_for(definition.data_signals.len());
        tracing::debug!(
            "Event for {} matched with confidence {}",
            definition.id,
            confidence
        );

        Evaluation::Matched {
            indicator_id: definition.id.clone(),
            description: definition.description.clone(),
            confidence,
            recommended_task: recommend_next_task(definition).to_string(),
        }
    }
}

/// More signals give a higher base confidence, capped and rounded to two decimals
pub fn confidence_for(signal_count: usize) -> f64 {
    let raw = (BASE_CONFIDENCE + CONFIDENCE_PER_SIGNAL * signal_count as f64).min(MAX_CONFIDENCE);
    (raw * 100.0).round() / 100.0
}

/// Next collection task for a definition, chosen from its PIR and COA
pub fn recommend_next_task(definition: &IndicatorDefinition) -> &'static str {
    match (definition.pir.trim(), definition.coa.as_str()) {
        ("1", "mlcoa") => {
            "Increase diplomatic and HUMINT monitoring; verify with additional travel data."
        }
        ("2", "mdcoa") => {
            "Task SAR imagery on key Rocket Force bases and highways; alert cyber team."
        }
        ("2", "mlcoa") => {
            "Monitor AIS for further Coast Guard movements; cross-cue SAR for dark ships."
        }
        ("3", _) => "Cross-check with NOTAMs and cyber telemetry; brief analysis section.",
        _ => "Gather more data and consult analyst.",
    }
}
