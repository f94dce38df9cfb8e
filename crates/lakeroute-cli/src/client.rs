//! Blocking HTTP client for the route server.

use crate::plan::PlannedRoute;
use anyhow::{bail, Context, Result};
use lakeroute_core::RouteRequest;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct RouteClient {
    client: Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// POST the request to `/v1/routes/best`.
    pub fn best_route(&self, request: &RouteRequest) -> Result<PlannedRoute> {
        let url = format!("{}/v1/routes/best", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("server returned HTTP {status}: {body}");
        }

        response
            .json()
            .with_context(|| format!("unexpected response body from {url}"))
    }
}
