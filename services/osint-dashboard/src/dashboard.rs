//! Web dashboard: server-rendered pages plus a JSON relay to the indicator API

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::indicator::{
    find_indicator, EvaluationResult, EventRequest, IndicatorClient, IndicatorsResponse,
};
use crate::pages;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub client: Arc<IndicatorClient>,
}

/// Build the dashboard axum router
pub fn build_router(client: IndicatorClient) -> Router {
    let dashboard_state = DashboardState {
        client: Arc::new(client),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/indicator/{id}", get(detail_handler))
        .route("/api/indicators", get(indicators_handler))
        .route("/api/event", post(event_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let indicators = dashboard.client.list_indicators().await;
    let status = match &indicators {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Failed to load indicators: {}", e);
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Html(pages::render_index(&indicators)))
}

async fn detail_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let indicators = dashboard.client.list_indicators().await;
    let status = match &indicators {
        Ok(list) if find_indicator(list, &id).is_some() => StatusCode::OK,
        Ok(_) => {
            tracing::debug!("Indicator {} not found", id);
            StatusCode::NOT_FOUND
        }
        Err(e) => {
            tracing::warn!("Failed to load indicator {}: {}", id, e);
            StatusCode::BAD_GATEWAY
        }
    };

    (status, Html(pages::render_detail(&id, &indicators)))
}

async fn indicators_handler(State(dashboard): State<DashboardState>) -> Response {
    match dashboard.client.list_indicators().await {
        Ok(indicators) => Json(IndicatorsResponse { indicators }).into_response(),
        Err(e) => {
            tracing::warn!("Failed to load indicators: {}", e);
            relay_error(e.to_string())
        }
    }
}

/// Forward the event to the indicator API and return its JSON verbatim
async fn event_handler(
    State(dashboard): State<DashboardState>,
    Json(request): Json<EventRequest>,
) -> Response {
    match dashboard.client.evaluate(&request).await {
        EvaluationResult::Response { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        EvaluationResult::Error(message) => relay_error(message),
    }
}

fn relay_error(message: String) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
