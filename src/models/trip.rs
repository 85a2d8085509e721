//! Trip request parsing
//!
//! A trip request is a single free-text line of the form
//! `"location | date-range"`. The pipe and the date segment are optional.

use crate::{Result, TravelBriefError};
use serde::{Deserialize, Serialize};

/// Date range used when the request names none
pub const DEFAULT_DATE_RANGE: &str = "next 7 days";

const DELIMITER: char = '|';

/// Raw request text as handed over by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    raw_text: String,
}

impl TripRequest {
    #[must_use]
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Split on the first `|`, trim both halves and default the date range.
    ///
    /// Anything after the first delimiter belongs to the date segment, so
    /// `"A | B | C"` yields the date range `"B | C"`.
    pub fn parse(&self) -> Result<ParsedTrip> {
        let (location, date_range) = match self.raw_text.split_once(DELIMITER) {
            Some((location, date_range)) => (location.trim(), Some(date_range.trim())),
            None => (self.raw_text.trim(), None),
        };

        if location.is_empty() {
            return Err(TravelBriefError::validation("Location cannot be empty"));
        }

        let date_range = date_range
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DATE_RANGE);

        Ok(ParsedTrip {
            location: location.to_string(),
            date_range: date_range.to_string(),
        })
    }
}

impl From<&str> for TripRequest {
    fn from(raw_text: &str) -> Self {
        Self::new(raw_text)
    }
}

/// Validated trip request: a non-empty place name and a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTrip {
    pub location: String,
    pub date_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Paris", "Paris")]
    #[case("  Kyoto  ", "Kyoto")]
    #[case("New York City", "New York City")]
    #[case("\tReykjavík\n", "Reykjavík")]
    fn test_location_without_dates_gets_default(#[case] input: &str, #[case] location: &str) {
        let trip = TripRequest::new(input).parse().unwrap();
        assert_eq!(trip.location, location);
        assert_eq!(trip.date_range, DEFAULT_DATE_RANGE);
    }

    #[rstest]
    #[case("Paris | June 1-7", "Paris", "June 1-7")]
    #[case("Lisbon|next weekend", "Lisbon", "next weekend")]
    #[case("  Cape Town  |  2025-03-01 to 2025-03-10  ", "Cape Town", "2025-03-01 to 2025-03-10")]
    fn test_location_and_dates(#[case] input: &str, #[case] location: &str, #[case] dates: &str) {
        let trip = TripRequest::new(input).parse().unwrap();
        assert_eq!(trip.location, location);
        assert_eq!(trip.date_range, dates);
    }

    #[test]
    fn test_only_first_pipe_splits() {
        let trip = TripRequest::new("Rome | May | June").parse().unwrap();
        assert_eq!(trip.location, "Rome");
        assert_eq!(trip.date_range, "May | June");
    }

    #[rstest]
    #[case("Paris |")]
    #[case("Paris |   ")]
    fn test_blank_date_segment_gets_default(#[case] input: &str) {
        let trip = TripRequest::new(input).parse().unwrap();
        assert_eq!(trip.location, "Paris");
        assert_eq!(trip.date_range, DEFAULT_DATE_RANGE);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("|")]
    #[case(" | next week")]
    fn test_empty_location_is_rejected(#[case] input: &str) {
        let err = TripRequest::new(input).parse().unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("Location cannot be empty"));
    }
}
