//! Trip Enrichment Pipeline
//!
//! Turns a raw `"location | date-range"` request into an
//! [`EnrichedTripContext`] by combining a location lookup, a weather
//! forecast and a destination summary. The pipeline holds no state between
//! runs.

use crate::config::ProvidersConfig;
use crate::models::{EnrichedTripContext, ForecastResult, TripRequest};
use crate::providers::{
    ForecastProvider, LocationResolver, OpenMeteoClient, SummaryProvider, WikipediaClient,
};
use crate::{Result, TravelBriefError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Drives the three providers for one trip request at a time
#[derive(Clone)]
pub struct EnrichmentPipeline {
    resolver: Arc<dyn LocationResolver>,
    forecast: Arc<dyn ForecastProvider>,
    summary: Arc<dyn SummaryProvider>,
}

impl EnrichmentPipeline {
    pub fn new(
        resolver: Arc<dyn LocationResolver>,
        forecast: Arc<dyn ForecastProvider>,
        summary: Arc<dyn SummaryProvider>,
    ) -> Self {
        Self {
            resolver,
            forecast,
            summary,
        }
    }

    /// HTTP-backed pipeline: Wikipedia for location and summary, Open-Meteo for weather
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let wikipedia = Arc::new(WikipediaClient::from_config(config).map_err(|e| {
            TravelBriefError::config(format!("Failed to create Wikipedia client: {e}"))
        })?);
        let weather = Arc::new(OpenMeteoClient::from_config(config).map_err(|e| {
            TravelBriefError::config(format!("Failed to create Open-Meteo client: {e}"))
        })?);

        Ok(Self::new(wikipedia.clone(), weather, wikipedia))
    }

    /// Enrich a raw request string
    pub async fn run(&self, raw_request: &str) -> Result<EnrichedTripContext> {
        self.enrich(&TripRequest::new(raw_request)).await
    }

    /// Enrich a trip request.
    ///
    /// Fails only when the request has no location. Provider failures
    /// degrade to their fallback values.
    #[instrument(skip(self), fields(request = request.raw_text()))]
    pub async fn enrich(&self, request: &TripRequest) -> Result<EnrichedTripContext> {
        let trip = request.parse()?;
        info!(
            "Enriching trip to '{}' for '{}'",
            trip.location, trip.date_range
        );

        let location_chain = async {
            let coordinates = self.resolver.resolve(&trip.location).await;
            let forecast = if coordinates.is_resolved() {
                self.forecast.fetch_forecast(coordinates).await
            } else {
                debug!("Skipping forecast, '{}' did not resolve", trip.location);
                ForecastResult::unavailable()
            };
            (coordinates, forecast)
        };

        let ((coordinates, forecast), summary) =
            futures::join!(location_chain, self.summary.fetch_summary(&trip.location));

        debug!(
            resolved = coordinates.is_resolved(),
            forecast = !forecast.is_unavailable(),
            summary = !summary.is_fallback(),
            "Assembled trip context"
        );

        Ok(EnrichedTripContext {
            location: trip.location,
            date_range: trip.date_range,
            coordinates,
            forecast,
            summary,
        })
    }

    /// Replace a task goal with the enriched natural-language brief
    pub async fn enrich_goal(&self, goal: &str) -> Result<String> {
        Ok(self.run(goal).await?.to_brief())
    }
}
