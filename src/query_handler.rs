use crate::exposition::{format_lifetime_stats, format_vitals};
use crate::stale_value_guard::StaleValueGuard;
use crate::wallbox_api::WallboxAPI;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Shared context for every scrape request
pub struct QueryHandler {
    wallbox: WallboxAPI,
    guard: StaleValueGuard,
}

impl QueryHandler {
    pub fn new(wallbox: WallboxAPI, guard: StaleValueGuard) -> Self {
        Self { wallbox, guard }
    }

    /// Fetches both readings, patches stale meters and renders the response body.
    /// Fetch failures are logged and rendered as zero-valued readings.
    pub async fn scrape(&self) -> String {
        let (vitals, stats) = tokio::join!(
            self.wallbox.fetch_vitals(),
            self.wallbox.fetch_lifetime_stats()
        );

        let mut vitals = vitals.unwrap_or_else(|e| {
            error!("Vitals error: {e:#}");
            Default::default()
        });
        let mut stats = stats.unwrap_or_else(|e| {
            error!("Stats error: {e:#}");
            Default::default()
        });

        self.guard.apply(&mut vitals, &mut stats);

        debug!("Vitals: {vitals:?}");
        debug!("Stats: {stats:?}");

        let mut body = format_vitals(&vitals);
        body.push_str(&format_lifetime_stats(&stats));
        body
    }

    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/query", get(query))
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }
}

/// GET /query, always answered with 200
async fn query(State(handler): State<Arc<QueryHandler>>) -> impl IntoResponse {
    let body = handler.scrape().await;
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
