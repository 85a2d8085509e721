//! Open-Meteo daily forecast client (no API key required)

use super::ForecastProvider;
use super::http::{build_client, get_json};
use crate::config::ProvidersConfig;
use crate::error::FetchError;
use crate::models::{Coordinates, ForecastResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Daily metrics requested from the provider
pub const DAILY_METRICS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    daily: Option<Map<String, Value>>,
}

/// Weather forecast client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a client against `base_url`; requests go to `{base_url}/forecast`
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout, user_agent)?,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ProvidersConfig) -> Result<Self, FetchError> {
        Self::new(
            config.weather_base_url.clone(),
            config.timeout(),
            &config.user_agent,
        )
    }

    fn forecast_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&timezone=auto",
            self.base_url.trim_end_matches('/'),
            coordinates.lat,
            coordinates.lon,
            DAILY_METRICS
        )
    }

    async fn try_fetch(&self, coordinates: Coordinates) -> Result<ForecastResult, FetchError> {
        let response: ForecastResponse =
            get_json(&self.client, &self.forecast_url(coordinates)).await?;
        Ok(response
            .daily
            .map(ForecastResult::from_daily)
            .unwrap_or_default())
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = coordinates.lat, lon = coordinates.lon))]
    async fn fetch_forecast(&self, coordinates: Coordinates) -> ForecastResult {
        match self.try_fetch(coordinates).await {
            Ok(forecast) => {
                info!(
                    "Retrieved forecast with {} days for ({})",
                    forecast.dates().len(),
                    coordinates.format_coordinates()
                );
                forecast
            }
            Err(e) => {
                warn!(
                    timeout = e.is_timeout(),
                    "Forecast lookup for ({}) failed: {}",
                    coordinates.format_coordinates(),
                    e
                );
                ForecastResult::unavailable()
            }
        }
    }
}
