use crate::readings::{LifetimeStats, Vitals};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the wallbox's local `/api/1` endpoints
#[derive(Clone)]
pub struct WallboxAPI {
    endpoint_url: String,
    client: reqwest::Client,
}

impl WallboxAPI {
    /// Accepts a bare host (`192.168.1.20`, `wallbox.lan:80`) or a full base URL
    pub fn new(address: &str) -> Self {
        let endpoint_url = if address.contains("://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", address.trim_end_matches('/'))
        };
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            endpoint_url,
            client,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub async fn fetch_vitals(&self) -> Result<Vitals, anyhow::Error> {
        self.fetch("vitals").await
    }

    pub async fn fetch_lifetime_stats(&self) -> Result<LifetimeStats, anyhow::Error> {
        self.fetch("lifetime").await
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T, anyhow::Error> {
        let url = format!("{}/api/1/{}", self.endpoint_url, resource);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        serde_json::from_slice(&body).with_context(|| format!("Malformed response from {url}"))
    }
}
