//! BDD test world for the dashboard service

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use osint_dashboard::config::ApiConfig;
use osint_dashboard::dashboard::build_router;
use osint_dashboard::indicator::{Indicator, IndicatorClient, IndicatorsResponse};
use osint_dashboard::io::{HttpClient, HttpResponse};
use osint_dashboard::DashboardError;

/// Events posted to the stub API, as (url, body)
pub type PostedEvents = Arc<Mutex<Vec<(String, serde_json::Value)>>>;

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    /// `None` makes `GET /indicators` fail at the network level
    pub indicators: Option<Vec<Indicator>>,
    /// `None` makes `POST /event` fail at the network level
    pub event_reply: Option<HttpResponse>,
    pub posted_events: PostedEvents,

    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}

impl DashboardWorld {
    pub fn router(&self) -> axum::Router {
        let stub = StubIndicatorApi {
            indicators: self.indicators.clone(),
            event_reply: self.event_reply.clone(),
            posted_events: Arc::clone(&self.posted_events),
        };
        build_router(IndicatorClient::new(&ApiConfig::default(), Arc::new(stub)))
    }

    pub fn response_json(&self) -> serde_json::Value {
        let body = self.response_body.as_ref().expect("no response body");
        serde_json::from_str(body).expect("response is not JSON")
    }
}

/// Stand-in for the indicator API that records every posted event
struct StubIndicatorApi {
    indicators: Option<Vec<Indicator>>,
    event_reply: Option<HttpResponse>,
    posted_events: PostedEvents,
}

#[async_trait]
impl HttpClient for StubIndicatorApi {
    async fn get(&self, url: &str) -> osint_dashboard::Result<HttpResponse> {
        match &self.indicators {
            Some(indicators) => Ok(HttpResponse {
                status: 200,
                body: serde_json::to_string(&IndicatorsResponse {
                    indicators: indicators.clone(),
                })?,
            }),
            None => Err(DashboardError::Http(format!(
                "GET {} failed: connection refused",
                url
            ))),
        }
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> osint_dashboard::Result<HttpResponse> {
        self.posted_events
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        match &self.event_reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(DashboardError::Http(format!(
                "POST {} failed: connection refused",
                url
            ))),
        }
    }
}
