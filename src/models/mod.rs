//! Data models for trip enrichment
//!
//! - Trip: raw request text and its parsed form
//! - Location: coordinates with the unresolved sentinel
//! - Forecast / Summary: provider payloads and their fallbacks
//! - Context: the assembled result and its prose rendering

pub mod context;
pub mod forecast;
pub mod location;
pub mod summary;
pub mod trip;
pub mod weather;

pub use context::EnrichedTripContext;
pub use forecast::ForecastResult;
pub use location::Coordinates;
pub use summary::{DestinationSummary, NO_EXTRACT_TEXT, UNAVAILABLE_TEXT};
pub use trip::{DEFAULT_DATE_RANGE, ParsedTrip, TripRequest};
pub use weather::weather_code_to_description;
