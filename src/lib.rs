//! `travelbrief` - trip request enrichment
//!
//! Turns a free-text `"location | date-range"` request into a structured
//! bundle of coordinates, a daily weather forecast and a destination summary,
//! ready to be handed to a text-generation step in place of the raw request.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod providers;

// Re-export core types for public API
pub use config::TravelBriefConfig;
pub use error::{FetchError, TravelBriefError};
pub use models::{
    Coordinates, DestinationSummary, EnrichedTripContext, ForecastResult, ParsedTrip, TripRequest,
};
pub use pipeline::EnrichmentPipeline;
pub use providers::{
    ForecastProvider, LocationResolver, OpenMeteoClient, SummaryProvider, WikipediaClient,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelBriefError>;
