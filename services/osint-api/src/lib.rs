//! OSINT indicator API
//!
//! Serves indicator definitions and evaluates simulated events against them.

pub mod config;
pub mod definitions;
pub mod error;
pub mod rule_engine;
pub mod server;

pub use config::{load_config, Config};
pub use error::{ApiError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::definitions::{load_definitions, DefinitionSet};
use crate::rule_engine::RuleEngine;

/// Build the rule engine from the configured definitions
pub fn build_engine(config: &Config) -> Result<RuleEngine> {
    let definitions = match &config.definitions {
        Some(path) => load_definitions(path)?,
        None => {
            tracing::debug!("No definitions file configured, using bundled set");
            DefinitionSet::bundled()?
        }
    };
    tracing::info!("Loaded {} indicator definitions", definitions.len());
    Ok(RuleEngine::new(Arc::new(definitions)))
}

/// Run the API with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let engine = build_engine(&config)?;
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ApiError::Config(format!(
            "Failed to bind indicator API to port {}: {}",
            config.server.port, e
        ))
    })?;

    serve(listener, engine, cancel).await
}

/// Serve the API on an already bound listener until `cancel` fires
pub async fn serve(
    listener: TcpListener,
    engine: RuleEngine,
    cancel: CancellationToken,
) -> Result<()> {
    let router = server::build_router(Arc::new(engine));
    tracing::info!("Indicator API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Indicator API stopped");
    Ok(())
}
