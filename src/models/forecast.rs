//! Daily forecast payload as returned by the weather provider

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider's `daily` series, passed through uninterpreted.
///
/// Keys are metric names (`time`, `temperature_2m_max`, ...) mapping to
/// day-indexed arrays. An empty mapping means the forecast is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastResult(Map<String, Value>);

impl ForecastResult {
    /// The "unavailable" structure
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_daily(daily: Map<String, Value>) -> Self {
        Self(daily)
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access to the daily series
    #[must_use]
    pub fn daily(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Dates covered by the series, in provider order
    #[must_use]
    pub fn dates(&self) -> Vec<&str> {
        self.0
            .get("time")
            .and_then(Value::as_array)
            .map(|days| days.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Numeric value of `metric` for the day at `index`, if present
    #[must_use]
    pub fn value_at(&self, metric: &str, index: usize) -> Option<f64> {
        self.0
            .get(metric)
            .and_then(Value::as_array)
            .and_then(|values| values.get(index))
            .and_then(Value::as_f64)
    }
}
