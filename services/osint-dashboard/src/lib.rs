//! OSINT Dashboard - indicator browsing and event simulation
//!
//! Renders the indicator list and detail pages from the indicator API and relays
//! simulated evaluation events to it.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod indicator;
pub mod io;
pub mod pages;

pub use config::{load_config, Config};
pub use error::{DashboardError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::indicator::IndicatorClient;
use crate::io::ReqwestHttpClient;

/// Run the dashboard with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
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
        DashboardError::Config(format!(
            "Failed to bind dashboard to port {}: {}",
            config.server.port, e
        ))
    })?;

    serve(listener, &config, cancel).await
}

/// Serve the dashboard on an already bound listener until `cancel` fires
pub async fn serve(listener: TcpListener, config: &Config, cancel: CancellationToken) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new());
    let client = IndicatorClient::new(&config.api, http);
    let router = dashboard::build_router(client);

    tracing::info!(
        "Dashboard listening on http://{} (indicator API at {})",
        listener.local_addr()?,
        config.api.base_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
