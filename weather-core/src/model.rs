use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProxyError;

/// Raw query-string parameters as they arrive on `/weather`.
#[derive(Debug, Clone, Default)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl WeatherParams {
    /// Build from raw query pairs. A repeated key keeps its last value;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut params.city,
                "lat" => &mut params.lat,
                "lon" => &mut params.lon,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }
}

/// A validated location. Coordinates are forwarded verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { lat: String, lon: String },
}

impl WeatherQuery {
    /// City takes precedence; otherwise both `lat` and `lon` must be set.
    pub fn from_params(params: &WeatherParams) -> Result<Self, ProxyError> {
        if let Some(city) = non_empty(&params.city) {
            return Ok(WeatherQuery::City(city.to_owned()));
        }

        match (non_empty(&params.lat), non_empty(&params.lon)) {
            (Some(lat), Some(lon)) => Ok(WeatherQuery::Coordinates {
                lat: lat.to_owned(),
                lon: lon.to_owned(),
            }),
            _ => Err(ProxyError::MissingLocation),
        }
    }

    /// Provider query pairs identifying the location.
    pub fn provider_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            WeatherQuery::City(city) => vec![("q", city.as_str())],
            WeatherQuery::Coordinates { lat, lon } => {
                vec![("lat", lat.as_str()), ("lon", lon.as_str())]
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Successful response body: both provider payloads, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedWeather {
    pub current: Value,
    pub forecast: Value,
}
