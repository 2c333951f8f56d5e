//! Client-side API fetch helpers
//!
//! These types mirror the indicator API's JSON structures and are shared
//! between SSR and client-side hydration.

use serde::{Deserialize, Deserializer, Serialize};

use crate::state::EvaluationResult;

/// Fixed address of the indicator API
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Indicator as returned by /indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "pir_text")]
    pub pir: String,
    pub coa: String,
    #[serde(default)]
    pub data_signals: Vec<String>,
}

/// The API may serve `pir` as a string or a bare number
fn pir_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Pir {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Pir::deserialize(deserializer)? {
        Pir::Text(text) => text,
        Pir::Number(number) => number.to_string(),
    })
}

/// Body of /indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorsResponse {
    pub indicators: Vec<Indicator>,
}

/// Body posted to /event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub indicator_id: String,
    pub payload: serde_json::Value,
}

impl EventRequest {
    pub fn simulated(indicator_id: impl Into<String>) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            payload: serde_json::json!({}),
        }
    }
}

pub async fn fetch_indicators() -> Result<Vec<Indicator>, String> {
    // In SSR mode this returns empty; only the browser talks to the API
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let url = format!("{}/indicators", API_BASE_URL);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if !resp.ok() {
            return Err(format!("GET {} returned status {}", url, resp.status()));
        }

        let body: IndicatorsResponse = resp.json().await.map_err(|e| format!("{}", e))?;
        Ok(body.indicators)
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        Ok(vec![])
    }
}

/// Post a simulated event for `indicator_id`
pub async fn post_event(indicator_id: String) -> EvaluationResult {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let url = format!("{}/event", API_BASE_URL);
        let request = EventRequest::simulated(indicator_id);

        let outcome: Result<serde_json::Value, String> = async {
            let resp = gloo_net::http::Request::post(&url)
                .json(&request)
                .map_err(|e| format!("{}", e))?
                .send()
                .await
                .map_err(|e| format!("{}", e))?;
            resp.json().await.map_err(|e| format!("{}", e))
        }
        .await;

        EvaluationResult::from_outcome(outcome)
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        EvaluationResult::Error(format!(
            "cannot evaluate {} outside the browser",
            indicator_id
        ))
    }
}
