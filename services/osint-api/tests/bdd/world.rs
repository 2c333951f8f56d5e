//! BDD test world for the indicator API

use cucumber::World;
use osint_api::definitions::IndicatorDefinition;

#[derive(Debug, Default, World)]
pub struct ApiWorld {
    pub definitions: Vec<IndicatorDefinition>,
    pub response_status: Option<u16>,
    pub response_json: Option<serde_json::Value>,
}
