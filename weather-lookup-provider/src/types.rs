//! Public data types shared by all weather providers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Supported weather provider identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// OpenWeather current weather data API.
    #[serde(rename = "openweather")]
    OpenWeather,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenWeather => write!(f, "openweather"),
        }
    }
}

/// Unit system used for temperatures returned by a provider.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Kelvin. What OpenWeather returns when no `units` parameter is sent.
    #[default]
    Standard,
    /// Degrees Celsius.
    Metric,
    /// Degrees Fahrenheit.
    Imperial,
}

impl TemperatureUnit {
    /// Value of the `units` query parameter, `None` for the API default.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::Metric => Some("metric"),
            Self::Imperial => Some("imperial"),
        }
    }

    /// Suffix shown after a temperature value.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Standard => "K",
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Parse from a config/env code (`standard`, `metric`, `imperial`, case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "standard" | "kelvin" => Some(Self::Standard),
            "metric" | "celsius" => Some(Self::Metric),
            "imperial" | "fahrenheit" => Some(Self::Imperial),
            _ => None,
        }
    }
}

// ============ Weather Types ============

/// Current conditions for a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Air temperature, in the provider's configured unit.
    pub temperature: f64,
    /// Perceived temperature, in the provider's configured unit.
    pub feels_like: f64,
    /// Short human-readable condition text (e.g. "clear sky").
    pub description: String,
    /// Location name as resolved by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// ISO 3166 country code of the resolved location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time the observation was made.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::utils::datetime"
    )]
    pub observed_at: Option<DateTime<Utc>>,
}

impl CurrentWeather {
    /// Build from the three fields every provider must supply.
    pub fn new(temperature: f64, feels_like: f64, description: impl Into<String>) -> Self {
        Self {
            temperature,
            feels_like,
            description: description.into(),
            city_name: None,
            country: None,
            observed_at: None,
        }
    }
}

// ============ Credential Types ============

/// Validation error for provider credentials.
///
/// Returned when credential fields are empty or have an invalid format.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl CredentialValidationError {
    /// Machine-readable key of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field, .. } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported weather providers.
///
/// Holds the endpoint and the credential a provider needs. Pass this to
/// [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// # Serialization
///
/// ```json
/// { "provider": "openweather", "credentials": { "base_url": "...", "api_key": "...", "units": "metric" } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// OpenWeather credentials.
    #[serde(rename = "openweather")]
    OpenWeather {
        /// API root, e.g. `https://api.openweathermap.org/data/2.5`.
        base_url: String,
        /// OpenWeather `appid`.
        api_key: String,
        /// Unit system to request.
        #[serde(default)]
        units: TemperatureUnit,
    },
}

impl ProviderCredentials {
    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::OpenWeather { .. } => ProviderType::OpenWeather,
        }
    }

    /// Check that the endpoint looks like an HTTP URL and the key is non-empty.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        match self {
            Self::OpenWeather {
                base_url, api_key, ..
            } => {
                let provider = self.provider_type();
                if base_url.trim().is_empty() {
                    return Err(CredentialValidationError::EmptyField {
                        provider,
                        field: "baseUrl".to_string(),
                        label: "API Base URL".to_string(),
                    });
                }
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(CredentialValidationError::InvalidFormat {
                        provider,
                        field: "baseUrl".to_string(),
                        label: "API Base URL".to_string(),
                        reason: "must start with http:// or https://".to_string(),
                    });
                }
                if api_key.trim().is_empty() {
                    return Err(CredentialValidationError::EmptyField {
                        provider,
                        field: "apiKey".to_string(),
                        label: "API Key".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

// The API key must never end up in logs through `{:?}`.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenWeather {
                base_url,
                api_key,
                units,
            } => f
                .debug_struct("OpenWeather")
                .field("base_url", base_url)
                .field("api_key", &crate::utils::log_sanitizer::mask_secret(api_key))
                .field("units", units)
                .finish(),
        }
    }
}
