//! # weather-lookup-provider
//!
//! A weather provider abstraction for fetching the current conditions of a
//! city by name.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [OpenWeather](https://openweathermap.org/current) | `appid` query parameter |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weather_lookup_provider::{create_provider, ProviderCredentials, TemperatureUnit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::OpenWeather {
//!         base_url: "https://api.openweathermap.org/data/2.5".to_string(),
//!         api_key: "your-key".to_string(),
//!         units: TemperatureUnit::Metric,
//!     })?;
//!
//!     let weather = provider.current_weather("london").await?;
//!     println!(
//!         "{}{} (feels like {}{}), {}",
//!         weather.temperature,
//!         provider.unit().symbol(),
//!         weather.feels_like,
//!         provider.unit().symbol(),
//!         weather.description
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`] — the API key was rejected
//! - [`ProviderError::CityNotFound`] — the provider has no match for the query
//! - [`ProviderError::RateLimited`] — API rate limit exceeded
//! - [`ProviderError::NetworkError`] — network connectivity issue
//!
//! Requests are never retried automatically; retrying is left to the caller.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, create_provider_with_timeout};

// Re-export core trait only (internal traits are not exported)
pub use traits::WeatherProvider;

// Re-export types
pub use types::{
    CredentialValidationError, CurrentWeather, ProviderCredentials, ProviderType, TemperatureUnit,
};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};

// Re-export concrete providers
pub use providers::{OPENWEATHER_API_BASE, OpenWeatherProvider};
