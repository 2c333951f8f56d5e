//! BDD step definitions for the simulate-event relay

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use osint_dashboard::io::HttpResponse;
use tower::ServiceExt;

use crate::world::DashboardWorld;

#[given(expr = "the event endpoint answers status {int} with {string}")]
fn event_endpoint_answers(world: &mut DashboardWorld, status: u16, body: String) {
    world.event_reply = Some(HttpResponse { status, body });
}

#[when(expr = "a simulated event is submitted for {string}")]
async fn submit_event(world: &mut DashboardWorld, indicator_id: String) {
    let body = serde_json::json!({ "indicator_id": indicator_id, "payload": {} });
    let response = world
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/event")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(bytes.to_vec()).unwrap());
}

#[then(expr = "exactly {int} event(s) should have been posted to the indicator API")]
fn posted_event_count(world: &mut DashboardWorld, expected: usize) {
    assert_eq!(world.posted_events.lock().unwrap().len(), expected);
}

#[then(expr = "the posted event should be for {string} with an empty payload")]
fn posted_event_body(world: &mut DashboardWorld, indicator_id: String) {
    let posted = world.posted_events.lock().unwrap();
    let (url, body) = posted.last().expect("no event posted");
    assert_eq!(url, "http://localhost:8000/event");
    assert_eq!(
        *body,
        serde_json::json!({ "indicator_id": indicator_id, "payload": {} })
    );
}

#[then(expr = "the response JSON field {string} should be {float}")]
fn json_field_number(world: &mut DashboardWorld, field: String, expected: f64) {
    assert_eq!(world.response_json()[field.as_str()].as_f64(), Some(expected));
}

#[then(expr = "the response JSON field {string} should be {string}")]
fn json_field_string(world: &mut DashboardWorld, field: String, expected: String) {
    assert_eq!(
        world.response_json()[field.as_str()].as_str(),
        Some(expected.as_str())
    );
}

#[then("the response JSON should have an error message")]
fn json_has_error(world: &mut DashboardWorld) {
    let json = world.response_json();
    let message = json["error"].as_str().expect("no error field");
    assert!(message.contains("connection refused"), "{}", message);
}
