//! Geographic coordinates with an in-band "unresolved" marker

use serde::{Deserialize, Serialize};

/// Coordinate pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinates {
    /// `{0, 0}`: the location lookup failed. Not a real place for this domain.
    pub const UNRESOLVED: Coordinates = Coordinates { lat: 0.0, lon: 0.0 };

    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether these coordinates are anything other than the sentinel
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        *self != Self::UNRESOLVED
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::UNRESOLVED
    }
}
