//! BDD step definitions for the list and detail pages

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use osint_dashboard::indicator::Indicator;
use tower::ServiceExt;

use crate::world::DashboardWorld;

#[given(expr = "the indicator API serves {int} indicators")]
fn api_serves_indicators(world: &mut DashboardWorld, count: usize) {
    let indicators = (1..=count)
        .map(|n| Indicator {
            id: format!("I{}", n),
            description: format!("Indicator number {}", n),
            pir: "1".to_string(),
            coa: "mlcoa".to_string(),
            data_signals: vec![format!("signal_{}", n)],
        })
        .collect();
    world.indicators = Some(indicators);
}

#[given(
    expr = "the indicator API serves the indicator {string} described as {string} with PIR {string} and COA {string}"
)]
fn api_serves_indicator(
    world: &mut DashboardWorld,
    id: String,
    description: String,
    pir: String,
    coa: String,
) {
    world.indicators.get_or_insert_with(Vec::new).push(Indicator {
        id,
        description,
        pir,
        coa,
        data_signals: vec!["sar_imagery".to_string(), "highway_traffic".to_string()],
    });
}

#[given("the indicator API is unreachable")]
fn api_unreachable(world: &mut DashboardWorld) {
    world.indicators = None;
    world.event_reply = None;
}

#[when(expr = "the page {string} is requested")]
async fn request_page(world: &mut DashboardWorld, uri: String) {
    let response = world
        .router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut DashboardWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the page should contain {string}")]
fn page_contains(world: &mut DashboardWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected page to contain '{}', but it didn't.\nPage:\n{}",
        expected,
        body
    );
}

#[then(expr = "the page should contain {int} indicator links")]
fn page_link_count(world: &mut DashboardWorld, expected: usize) {
    let body = world.response_body.as_ref().expect("no response body");
    assert_eq!(body.matches("<a href=\"/indicator/").count(), expected);
}

#[then("every indicator should be linked to its detail page")]
fn every_indicator_linked(world: &mut DashboardWorld) {
    let body = world.response_body.as_ref().expect("no response body");
    for indicator in world.indicators.as_ref().expect("no indicators served") {
        let link = format!(
            "<a href=\"/indicator/{}\">{}: {}</a>",
            indicator.id, indicator.id, indicator.description
        );
        assert!(body.contains(&link), "missing link {}", link);
    }
}
