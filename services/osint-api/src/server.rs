//! HTTP surface of the indicator API

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::rule_engine::{Evaluation, EventRequest, RuleEngine};

/// Build the API router
pub fn build_router(engine: Arc<RuleEngine>) -> Router {
    Router::new()
        .route("/indicators", get(indicators_handler))
        .route("/event", post(event_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

async fn indicators_handler(State(engine): State<Arc<RuleEngine>>) -> impl IntoResponse {
    Json(serde_json::json!({ "indicators": engine.definitions().all() }))
}

async fn event_handler(
    State(engine): State<Arc<RuleEngine>>,
    Json(event): Json<EventRequest>,
) -> Response {
    match engine.evaluate(&event) {
        Evaluation::Unmatched { reason } => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": reason })),
        )
            .into_response(),
        matched => Json(matched).into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
