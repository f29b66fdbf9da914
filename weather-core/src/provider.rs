use anyhow::Context;
use async_trait::async_trait;
pub use reqwest::Url;
use serde_json::Value;
use std::fmt::Debug;

pub mod http;
pub mod openweather;

pub use http::HttpProviderClient;
pub use openweather::OpenWeatherEndpoints;

/// Status and raw body of one provider call. The body is decoded on demand,
/// so a payload that ends up discarded never has to be valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: String,
}

impl ProviderReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn json(&self) -> anyhow::Result<Value> {
        serde_json::from_str(&self.body).with_context(|| {
            format!(
                "Failed to parse provider JSON (status {}): {}",
                self.status,
                truncate_body(&self.body)
            )
        })
    }
}

/// Minimal outbound capability the proxy needs: GET a URL, get back
/// `(status, body)`. Any status is a successful call; only transport
/// failures are errors.
#[async_trait]
pub trait ProviderClient: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> anyhow::Result<ProviderReply>;
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
