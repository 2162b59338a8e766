use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::WeatherReport;

use super::{ProviderError, WeatherProvider};

/// Production endpoint for WeatherAPI.com.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, location: &str) -> Result<WeatherReport, ProviderError> {
        let url = format!("{}/current.json", self.base_url);

        debug!(location, "fetching current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(WeatherReport::celsius(
            parsed.location.name,
            parsed.current.temp_c,
            parsed.current.condition.text,
        ))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // MAX may fall inside a multibyte character; cut at the nearest
    // boundary at or below it. Index 0 is always a boundary.
    let cut = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
    format!("{}...", &body[..cut])
}
