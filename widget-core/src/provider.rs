use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Config, model::WeatherReport, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// What went wrong while fetching a report.
///
/// The widget shows the same message for every variant; the distinction
/// exists for logs and for callers that want more than the canned string.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a free-form location query.
    async fn current(&self, location: &str) -> Result<WeatherReport, ProviderError>;
}

/// Construct the production provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `weather-widget configure` or set the {} environment variable.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(WeatherApiProvider::new(api_key)))
}
