//! BDD step definitions for listing indicators and evaluating events

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use osint_api::definitions::{DefinitionSet, IndicatorDefinition};
use osint_api::rule_engine::RuleEngine;
use osint_api::server::build_router;

use crate::world::ApiWorld;

#[given(expr = "an indicator {string} with PIR {string}, COA {string} and {int} data signal(s)")]
fn indicator_definition(
    world: &mut ApiWorld,
    id: String,
    pir: String,
    coa: String,
    signals: usize,
) {
    world.definitions.push(IndicatorDefinition {
        description: format!("Definition {}", id),
        id,
        pir,
        coa,
        data_signals: (0..signals).map(|i| format!("signal_{}", i)).collect(),
    });
}

async fn send(world: &mut ApiWorld, request: Request<Body>) {
    let set = DefinitionSet::new(world.definitions.clone()).expect("invalid definitions");
    let router = build_router(Arc::new(RuleEngine::new(Arc::new(set))));
    let response = router.oneshot(request).await.unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_json = serde_json::from_slice(&body).ok();
}

#[when("the indicators are listed")]
async fn list_indicators(world: &mut ApiWorld) {
    let request = Request::builder()
        .uri("/indicators")
        .body(Body::empty())
        .unwrap();
    send(world, request).await;
}

#[when(expr = "an event is posted for {string}")]
async fn post_event(world: &mut ApiWorld, indicator_id: String) {
    let body = serde_json::json!({ "indicator_id": indicator_id, "payload": {} });
    let request = Request::builder()
        .method("POST")
        .uri("/event")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(world, request).await;
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut ApiWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the listed ids should be {string}")]
fn listed_ids(world: &mut ApiWorld, expected: String) {
    let json = world.response_json.as_ref().expect("no JSON response");
    let ids: Vec<&str> = json["indicators"]
        .as_array()
        .expect("indicators is not an array")
        .iter()
        .filter_map(|indicator| indicator["id"].as_str())
        .collect();
    assert_eq!(ids.join(","), expected);
}

#[then(expr = "the confidence should be {float}")]
fn confidence(world: &mut ApiWorld, expected: f64) {
    let json = world.response_json.as_ref().expect("no JSON response");
    assert_eq!(json["matched"], true);
    assert_eq!(json["confidence"].as_f64(), Some(expected));
}

#[then(expr = "the recommended task should start with {string}")]
fn recommended_task(world: &mut ApiWorld, prefix: String) {
    let json = world.response_json.as_ref().expect("no JSON response");
    let task = json["recommended_task"].as_str().expect("no recommended task");
    assert!(task.starts_with(&prefix), "unexpected task: {}", task);
}

#[then(expr = "the detail should be {string}")]
fn detail(world: &mut ApiWorld, expected: String) {
    let json = world.response_json.as_ref().expect("no JSON response");
    assert_eq!(json["detail"].as_str(), Some(expected.as_str()));
}
