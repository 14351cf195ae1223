//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::OpenWeatherProvider;
use crate::traits::WeatherProvider;
use crate::types::ProviderCredentials;

/// Creates a [`WeatherProvider`] instance from the given credentials.
///
/// Credentials are validated first; a bad field comes back as
/// [`ProviderError::InvalidParameter`] naming that field. The returned provider is
/// wrapped in `Arc<dyn WeatherProvider>` so it can be moved into spawned lookups.
///
/// # Examples
///
/// ```rust,no_run
/// use weather_lookup_provider::{create_provider, ProviderCredentials, TemperatureUnit};
///
/// let provider = create_provider(ProviderCredentials::OpenWeather {
///     base_url: "https://api.openweathermap.org/data/2.5".to_string(),
///     api_key: "your-key".to_string(),
///     units: TemperatureUnit::Metric,
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn WeatherProvider>> {
    credentials
        .validate()
        .map_err(|e| ProviderError::InvalidParameter {
            provider: credentials.provider_type().to_string(),
            param: e.field().to_string(),
            detail: e.to_string(),
        })?;

    match credentials {
        ProviderCredentials::OpenWeather {
            base_url,
            api_key,
            units,
        } => Ok(Arc::new(OpenWeatherProvider::new(base_url, api_key, units))),
    }
}

/// Same as [`create_provider`] with an explicit per-request timeout.
pub fn create_provider_with_timeout(
    credentials: ProviderCredentials,
    request_timeout: std::time::Duration,
) -> Result<Arc<dyn WeatherProvider>> {
    credentials
        .validate()
        .map_err(|e| ProviderError::InvalidParameter {
            provider: credentials.provider_type().to_string(),
            param: e.field().to_string(),
            detail: e.to_string(),
        })?;

    match credentials {
        ProviderCredentials::OpenWeather {
            base_url,
            api_key,
            units,
        } => Ok(Arc::new(OpenWeatherProvider::with_timeout(
            base_url,
            api_key,
            units,
            request_timeout,
        ))),
    }
}
