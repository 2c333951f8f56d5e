//! Indicator records and the client for the indicator API

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::io::{HttpClient, HttpResponse};
use crate::DashboardError;

/// An OSINT indicator as served by `GET /indicators`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pir: String,
    pub coa: String,
    #[serde(default)]
    pub data_signals: Vec<String>,
}

/// Accepts `"pir": "1"` as well as `"pir": 1`, keeping the text form
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

/// Body of `GET /indicators`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorsResponse {
    pub indicators: Vec<Indicator>,
}

/// Body of `POST /event`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub indicator_id: String,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

impl EventRequest {
    /// A simulated event carries no payload of its own
    pub fn simulated(indicator_id: impl Into<String>) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            payload: empty_payload(),
        }
    }
}

fn empty_payload() -> Value {
    Value::Object(serde_json::Map::new())
}

/// What the detail page shows after an evaluation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// Parsed JSON from the event endpoint, whatever its shape or status
    Response { status: u16, body: Value },
    /// Network or parse failure
    Error(String),
}

impl EvaluationResult {
    /// Error message to display, if any. A response object carrying a string
    /// `error` field counts as an error too.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            EvaluationResult::Error(message) => Some(message),
            EvaluationResult::Response { body, .. } => body.get("error").and_then(Value::as_str),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            EvaluationResult::Response { body, .. } => body.clone(),
            EvaluationResult::Error(message) => serde_json::json!({ "error": message }),
        }
    }
}

/// Find the indicator with the given id in a fetched collection
pub fn find_indicator<'a>(indicators: &'a [Indicator], id: &str) -> Option<&'a Indicator> {
    indicators.iter().find(|indicator| indicator.id == id)
}

/// Client for the indicator API
pub struct IndicatorClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for IndicatorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl IndicatorClient {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created IndicatorClient for {}", base_url);
        Self { base_url, http }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full indicator collection
    pub async fn list_indicators(&self) -> crate::Result<Vec<Indicator>> {
        let url = format!("{}/indicators", self.base_url);
        let response = self.http.get(&url).await?;
        if !response.is_success() {
            tracing::debug!("Non-success response from {}: status={}", url, response.status);
            return Err(DashboardError::Upstream {
                status: response.status,
            });
        }

        let parsed: IndicatorsResponse = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} indicators", parsed.indicators.len());
        Ok(parsed.indicators)
    }

    /// Issue exactly one `POST /event` and hand back the raw response
    pub async fn post_event(&self, request: &EventRequest) -> crate::Result<HttpResponse> {
        let url = format!("{}/event", self.base_url);
        let body = serde_json::to_value(request)?;
        self.http.post_json(&url, &body).await
    }

    /// Post an event and interpret the reply the way the detail page does:
    /// any parseable JSON is a response, everything else is an error.
    pub async fn evaluate(&self, request: &EventRequest) -> EvaluationResult {
        tracing::debug!("Evaluating event for indicator {}", request.indicator_id);
        let response = match self.post_event(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Event for {} failed: {}", request.indicator_id, e);
                return EvaluationResult::Error(e.to_string());
            }
        };

        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => EvaluationResult::Response {
                status: response.status,
                body,
            },
            Err(e) => {
                tracing::warn!(
                    "Unparseable event response (status {}): {}",
                    response.status,
                    e
                );
                EvaluationResult::Error(e.to_string())
            }
        }
    }
}
