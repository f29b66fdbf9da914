//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration (file + environment)
//! - Query validation and the combined response model
//! - The outbound provider capability and its OpenWeather URLs
//! - `WeatherService`, which turns one query into two provider calls
//!
//! It is used by `weather-server`, but has no dependency on any HTTP server.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use config::Config;
pub use error::{ErrorPayload, ProxyError};
pub use model::{CombinedWeather, WeatherParams, WeatherQuery};
pub use provider::{HttpProviderClient, OpenWeatherEndpoints, ProviderClient, ProviderReply, Url};
pub use service::WeatherService;
