//! Weather provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod openweather;

pub use openweather::{OPENWEATHER_API_BASE, OpenWeatherProvider};
