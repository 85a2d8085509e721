//! External data providers
//!
//! Each trait method is infallible: implementations absorb their own
//! failures and return the documented fallback value.

pub mod http;
pub mod open_meteo;
pub mod wikipedia;

use crate::models::{Coordinates, DestinationSummary, ForecastResult};
use async_trait::async_trait;

pub use open_meteo::OpenMeteoClient;
pub use wikipedia::{PageCandidate, WikipediaClient};

/// Resolves a free-text place name to coordinates
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// `Coordinates::UNRESOLVED` on any failure or when nothing matches
    async fn resolve(&self, location: &str) -> Coordinates;
}

/// Fetches a multi-day daily forecast for a coordinate pair
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Empty `ForecastResult` on any failure
    async fn fetch_forecast(&self, coordinates: Coordinates) -> ForecastResult;
}

/// Fetches a short plain-text description of a place
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn fetch_summary(&self, location: &str) -> DestinationSummary;
}
