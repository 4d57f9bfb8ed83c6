//! Tesla Wallbox Exporter Library
//!
//! This library polls a Tesla Wall Connector over its local HTTP API and
//! re-exposes the vitals and lifetime statistics as Prometheus metrics.

pub mod config;
pub mod exposition;
pub mod query_handler;
pub mod readings;
pub mod stale_value_guard;
pub mod wallbox_api;

// Re-export commonly used types for easier access
pub use config::{ConfigError, ExporterConfig};
pub use query_handler::QueryHandler;
pub use readings::{LifetimeStats, Vitals};
pub use stale_value_guard::{CarriedState, StaleValueGuard};
pub use wallbox_api::WallboxAPI;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serves `/query` on an already bound listener until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    config: &ExporterConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let handler = Arc::new(QueryHandler::new(
        WallboxAPI::new(&config.wallbox_address),
        StaleValueGuard::new(config.keep_power_meter),
    ));

    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, handler.router())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
