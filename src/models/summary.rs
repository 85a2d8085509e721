//! Destination summary text and its two fallback outcomes

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Returned when a page was found but carries no extract
pub const NO_EXTRACT_TEXT: &str = "No information available";
/// Returned when the lookup failed or found no page at all
pub const UNAVAILABLE_TEXT: &str = "Information unavailable";

/// Short plain-text description of a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationSummary {
    /// Introductory extract of the matching page
    Extract(String),
    /// A page exists but has no extract content
    NoExtract,
    /// Transport failure, malformed response or no page
    Unavailable,
}

impl DestinationSummary {
    /// The text handed to the generation step
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            DestinationSummary::Extract(text) => text,
            DestinationSummary::NoExtract => NO_EXTRACT_TEXT,
            DestinationSummary::Unavailable => UNAVAILABLE_TEXT,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        !matches!(self, DestinationSummary::Extract(_))
    }
}

impl fmt::Display for DestinationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DestinationSummary {
    fn from(text: String) -> Self {
        match text.as_str() {
            NO_EXTRACT_TEXT => DestinationSummary::NoExtract,
            UNAVAILABLE_TEXT => DestinationSummary::Unavailable,
            _ => DestinationSummary::Extract(text),
        }
    }
}

impl Serialize for DestinationSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DestinationSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
