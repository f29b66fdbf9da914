use anyhow::{Context, Result};
use reqwest::Url;
use std::fmt;

use crate::model::WeatherQuery;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const CURRENT_RESOURCE: &str = "weather";
const FORECAST_RESOURCE: &str = "forecast";

/// Builds the OpenWeather current-conditions and 5-day/3-hour forecast URLs.
#[derive(Clone)]
pub struct OpenWeatherEndpoints {
    base_url: String,
    api_key: String,
}

impl fmt::Debug for OpenWeatherEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherEndpoints")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenWeatherEndpoints {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn current_url(&self, query: &WeatherQuery) -> Result<Url> {
        self.build(CURRENT_RESOURCE, query)
    }

    pub fn forecast_url(&self, query: &WeatherQuery) -> Result<Url> {
        self.build(FORECAST_RESOURCE, query)
    }

    fn build(&self, resource: &str, query: &WeatherQuery) -> Result<Url> {
        let base = format!("{}/{}", self.base_url.trim_end_matches('/'), resource);

        let mut params = query.provider_params();
        params.push(("units", "metric"));
        params.push(("appid", self.api_key.as_str()));

        Url::parse_with_params(&base, &params)
            .with_context(|| format!("Invalid OpenWeather base URL: {}", self.base_url))
    }
}
