//! Weather Lookup Core Library
//!
//! Holds the two-step lookup state machine behind a weather lookup screen:
//! - `Input`: the user edits a city query and submits it
//! - `Result`: the current conditions for that city are shown
//!
//! The presentation layer owns a [`LookupController`], forwards user intents to
//! it and renders the state it exposes. All network access goes through a
//! [`WeatherProvider`](weather_lookup_provider::WeatherProvider).

pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    CompletedLookup, LOOKUP_FAILED_MESSAGE, LookupController, LookupOutcome, PendingLookup,
    RejectReason,
};
pub use types::{LookupSnapshot, LookupState, Step, WeatherResult};
