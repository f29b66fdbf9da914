use anyhow::Context;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use weather_core::{Config, HttpProviderClient, OpenWeatherEndpoints, WeatherService};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy server")]
pub struct Cli {
    /// Path to a TOML config file; defaults to the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address, overriding config and `PORT`.
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }

        let client = HttpProviderClient::new(config.provider.timeout())?;
        let endpoints =
            OpenWeatherEndpoints::new(&config.provider.base_url, &config.provider.api_key);
        let service = WeatherService::new(Arc::new(client), endpoints);

        let listener = tokio::net::TcpListener::bind(config.server.bind)
            .await
            .with_context(|| format!("Failed to bind {}", config.server.bind))?;

        tracing::info!(addr = %config.server.bind, provider = %config.provider.base_url, "weather proxy listening");

        server::serve(listener, server::router(service)).await
    }
}
