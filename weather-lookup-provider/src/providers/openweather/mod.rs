//! OpenWeather current weather provider
//!
//! <https://openweathermap.org/current>

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::providers::common::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};
use crate::types::TemperatureUnit;

pub(crate) use types::{OpenWeatherErrorBody, OpenWeatherResponse};

/// Public OpenWeather API root
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeather Provider
pub struct OpenWeatherProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) units: TemperatureUnit,
}

impl OpenWeatherProvider {
    pub fn new(base_url: String, api_key: String, units: TemperatureUnit) -> Self {
        Self::with_timeout(
            base_url,
            api_key,
            units,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Same as [`new`](Self::new) with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: String,
        api_key: String,
        units: TemperatureUnit,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client: create_http_client(request_timeout),
            base_url,
            api_key,
            units,
        }
    }
}
