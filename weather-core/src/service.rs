use serde_json::Value;
use std::sync::Arc;

use crate::{
    error::ProxyError,
    model::{CombinedWeather, WeatherParams, WeatherQuery},
    provider::{OpenWeatherEndpoints, ProviderClient},
};

const FALLBACK_MESSAGE: &str = "City not found";

/// Translates one inbound weather query into the two provider calls and
/// folds their results into a single response.
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Arc<dyn ProviderClient>,
    endpoints: OpenWeatherEndpoints,
}

impl WeatherService {
    pub fn new(client: Arc<dyn ProviderClient>, endpoints: OpenWeatherEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Both calls are always issued, current conditions first. The forecast
    /// body is only decoded once the current call has answered 200, and is
    /// then forwarded as-is whatever its status.
    pub async fn lookup(&self, params: &WeatherParams) -> Result<CombinedWeather, ProxyError> {
        let query = WeatherQuery::from_params(params)?;

        let current_url = self.endpoints.current_url(&query)?;
        let forecast_url = self.endpoints.forecast_url(&query)?;

        let current = self.client.get(&current_url).await?;
        let forecast = self.client.get(&forecast_url).await?;

        let current_body = current.json()?;

        if !current.is_ok() {
            let message = provider_message(&current_body);
            tracing::info!(?query, status = current.status, %message, "provider rejected lookup");
            return Err(ProxyError::Provider { status: current.status, message });
        }

        if !forecast.is_ok() {
            tracing::warn!(?query, status = forecast.status, "forecast call failed, forwarding payload");
        }

        Ok(CombinedWeather {
            current: current_body,
            forecast: forecast.json()?,
        })
    }
}

fn provider_message(body: &Value) -> String {
    match body.get("message") {
        None | Some(Value::Null) => FALLBACK_MESSAGE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
