//! View states for the two pages and the evaluate button

use serde_json::Value;

use crate::api::Indicator;

/// Fetch state of the indicator collection
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Failed,
    Loaded(Vec<Indicator>),
}

impl PageState {
    /// `None` means the fetch has not resolved yet
    pub fn from_fetch(fetched: Option<Result<Vec<Indicator>, String>>) -> Self {
        match fetched {
            None => PageState::Loading,
            Some(Err(_)) => PageState::Failed,
            Some(Ok(indicators)) => PageState::Loaded(indicators),
        }
    }
}

/// What the detail page shows for a given route id
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Failed,
    NotFound,
    Found(Indicator),
}

impl DetailState {
    pub fn resolve(fetched: Option<Result<Vec<Indicator>, String>>, id: &str) -> Self {
        match PageState::from_fetch(fetched) {
            PageState::Loading => DetailState::Loading,
            PageState::Failed => DetailState::Failed,
            PageState::Loaded(indicators) => indicators
                .into_iter()
                .find(|indicator| indicator.id == id)
                .map(DetailState::Found)
                .unwrap_or(DetailState::NotFound),
        }
    }
}

/// Result of one evaluation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    Response(Value),
    Error(String),
}

impl EvaluationResult {
    pub fn from_outcome(outcome: Result<Value, String>) -> Self {
        match outcome {
            Ok(value) => EvaluationResult::Response(value),
            Err(message) => EvaluationResult::Error(message),
        }
    }

    /// A response object with a string `error` field is shown as an error
    pub fn error_message(&self) -> Option<&str> {
        match self {
            EvaluationResult::Error(message) => Some(message),
            EvaluationResult::Response(value) => value.get("error").and_then(Value::as_str),
        }
    }

    pub fn pretty_json(&self) -> String {
        let value = match self {
            EvaluationResult::Response(value) => value.clone(),
            EvaluationResult::Error(message) => serde_json::json!({ "error": message }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

/// State of the evaluate button
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState {
    Idle,
    Pending,
    Done(EvaluationResult),
}

impl ActionState {
    pub fn from_action(pending: bool, last: Option<EvaluationResult>) -> Self {
        match (pending, last) {
            (true, _) => ActionState::Pending,
            (false, Some(result)) => ActionState::Done(result),
            (false, None) => ActionState::Idle,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ActionState::Pending)
    }

    pub fn label(&self) -> &'static str {
        if self.is_disabled() {
            "Evaluating…"
        } else {
            "Simulate Event"
        }
    }
}
