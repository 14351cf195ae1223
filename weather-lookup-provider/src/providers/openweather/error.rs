//! OpenWeather error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::OpenWeatherProvider;

/// OpenWeather error code mapping
/// Reference: <https://openweathermap.org/faq#error401>
impl ProviderErrorMapper for OpenWeatherProvider {
    fn provider_name(&self) -> &'static str {
        "openweather"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 401: missing, invalid or not yet activated API key
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404: no location matches the query
            Some("404") => ProviderError::CityNotFound {
                provider: self.provider_name().to_string(),
                city: context.city.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 400: "Nothing to geocode" and friends
            Some("400") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "q".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
