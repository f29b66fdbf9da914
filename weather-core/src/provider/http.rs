use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::{ProviderClient, ProviderReply};

/// `ProviderClient` backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProviderClient {
    http: Client,
}

impl HttpProviderClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weather-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    async fn get(&self, url: &Url) -> Result<ProviderReply> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to send request to {}", redacted(url)))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to read response body from {}", redacted(url)))?;

        tracing::debug!(url = %redacted(url), status, "provider call finished");

        Ok(ProviderReply { status, body })
    }
}

/// Scheme, host, port and path only; the query carries the API key.
fn redacted(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}
