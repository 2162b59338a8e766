//! Core library for the `weather-widget` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com provider client
//! - The widget state machine (reducer, result state, busy flag)
//! - Pure message formatters for display
//!
//! It is used by `widget-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod message;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use message::{condition_message, location_message, location_message_at, temperature_message};
pub use model::WeatherReport;
pub use provider::{ProviderError, WeatherProvider, provider_from_config};
pub use widget::{
    Action, Effect, FETCH_FAILED_MESSAGE, VALIDATION_MESSAGE, WeatherResult, WeatherWidget,
    WidgetState, reduce,
};
