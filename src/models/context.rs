//! Enriched trip context and its prose rendering

use super::{Coordinates, DestinationSummary, ForecastResult, weather_code_to_description};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Everything the generation step gets in place of the raw request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTripContext {
    pub location: String,
    pub date_range: String,
    pub coordinates: Coordinates,
    pub forecast: ForecastResult,
    pub summary: DestinationSummary,
}

impl EnrichedTripContext {
    /// Render the context as a natural-language brief
    #[must_use]
    pub fn to_brief(&self) -> String {
        self.to_string()
    }

    fn format_day(&self, index: usize, date: &str) -> String {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| format!("{date} ({})", d.format("%a")))
            .unwrap_or_else(|_| date.to_string());

        let reading = |metric: &str, unit: &str| {
            self.forecast
                .value_at(metric, index)
                .map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}{unit}"))
        };

        // Open-Meteo reports the code under either spelling depending on the request
        let conditions = self
            .forecast
            .value_at("weathercode", index)
            .or_else(|| self.forecast.value_at("weather_code", index))
            .and_then(|code| u8::try_from(code as i64).ok())
            .map_or("Unknown", weather_code_to_description);

        format!(
            "{day}: high {}, low {}, precipitation {}, {conditions}",
            reading("temperature_2m_max", "°C"),
            reading("temperature_2m_min", "°C"),
            reading("precipitation_sum", " mm"),
        )
    }
}

/// Natural-language brief.
///
/// Degraded lookups are spelled out in English so the reader never
/// sees a bare sentinel value.
impl Display for EnrichedTripContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan a trip to {} for {}.", self.location, self.date_range)?;
        writeln!(f)?;
        writeln!(f, "Destination overview:")?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;

        if self.coordinates.is_resolved() {
            writeln!(f, "Coordinates: {}", self.coordinates.format_coordinates())?;
        } else {
            writeln!(f, "Coordinates: unavailable, the location could not be resolved.")?;
        }
        writeln!(f)?;

        if self.forecast.is_unavailable() {
            writeln!(f, "Weather forecast: unavailable.")?;
        } else {
            writeln!(f, "Weather forecast:")?;
            for (index, date) in self.forecast.dates().into_iter().enumerate() {
                writeln!(f, "- {}", self.format_day(index, date))?;
            }
        }
        Ok(())
    }
}
