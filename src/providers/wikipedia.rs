//! Wikipedia `action=query` client
//!
//! Serves both coordinate lookups (`prop=coordinates`) and introductory
//! extracts (`prop=extracts`). The response keys pages by page id, which is
//! meaningless to us, so pages are read in document order and the first
//! one satisfying a predicate wins.

use super::http::{build_client, get_json};
use super::{LocationResolver, SummaryProvider};
use crate::config::ProvidersConfig;
use crate::error::FetchError;
use crate::models::{Coordinates, DestinationSummary};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const COORDINATES_PROP: &str = "prop=coordinates";
const EXTRACTS_PROP: &str = "prop=extracts&exintro=true&explaintext=true";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Map<String, Value>,
}

/// One `{lat, lon}` entry of a page's coordinate list
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoordinateEntry {
    pub lat: f64,
    pub lon: f64,
}

/// A page from the `query.pages` mapping
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageCandidate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Vec<CoordinateEntry>>,
    #[serde(default)]
    pub extract: Option<String>,
}

impl PageCandidate {
    /// First coordinate pair on the page, if it carries any
    #[must_use]
    pub fn first_coordinates(&self) -> Option<Coordinates> {
        self.coordinates
            .as_deref()
            .and_then(<[CoordinateEntry]>::first)
            .map(|c| Coordinates::new(c.lat, c.lon))
    }

    /// Extract text, ignoring blank extracts
    #[must_use]
    pub fn extract_text(&self) -> Option<&str> {
        self.extract.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// First page for which `select` yields a value
pub fn first_match<T>(
    pages: &[PageCandidate],
    select: impl Fn(&PageCandidate) -> Option<T>,
) -> Option<T> {
    pages.iter().find_map(select)
}

/// Wikipedia API client
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

impl WikipediaClient {
    /// Create a client against `api_url` (the `api.php` endpoint)
    pub fn new(
        api_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout, user_agent)?,
            api_url: api_url.into(),
        })
    }

    pub fn from_config(config: &ProvidersConfig) -> Result<Self, FetchError> {
        Self::new(
            config.wikipedia_api_url.clone(),
            config.timeout(),
            &config.user_agent,
        )
    }

    fn query_url(&self, title: &str, prop: &str) -> String {
        format!(
            "{}?action=query&format=json&titles={}&{}",
            self.api_url,
            urlencoding::encode(title),
            prop
        )
    }

    /// Pages of a `titles=` query in document order. Undecodable pages are skipped.
    async fn fetch_pages(&self, title: &str, prop: &str) -> Result<Vec<PageCandidate>, FetchError> {
        let url = self.query_url(title, prop);
        let response: QueryResponse = get_json(&self.client, &url).await?;

        let pages = response
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(page_id, page)| match serde_json::from_value(page) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    debug!("Skipping page {}: {}", page_id, e);
                    None
                }
            })
            .collect();

        Ok(pages)
    }

    async fn try_resolve(&self, location: &str) -> Result<Option<Coordinates>, FetchError> {
        let pages = self.fetch_pages(location, COORDINATES_PROP).await?;
        Ok(first_match(&pages, PageCandidate::first_coordinates))
    }

    async fn try_summary(&self, location: &str) -> Result<DestinationSummary, FetchError> {
        let pages = self.fetch_pages(location, EXTRACTS_PROP).await?;
        if pages.is_empty() {
            return Ok(DestinationSummary::Unavailable);
        }

        let summary = first_match(&pages, |page| page.extract_text().map(str::to_string))
            .map_or(DestinationSummary::NoExtract, DestinationSummary::Extract);
        Ok(summary)
    }
}

#[async_trait]
impl LocationResolver for WikipediaClient {
    #[instrument(skip(self))]
    async fn resolve(&self, location: &str) -> Coordinates {
        match self.try_resolve(location).await {
            Ok(Some(coordinates)) => {
                info!(
                    "Resolved '{}' to ({})",
                    location,
                    coordinates.format_coordinates()
                );
                coordinates
            }
            Ok(None) => {
                info!("No page with coordinates found for '{}'", location);
                Coordinates::UNRESOLVED
            }
            Err(e) => {
                warn!(timeout = e.is_timeout(), "Location lookup for '{}' failed: {}", location, e);
                Coordinates::UNRESOLVED
            }
        }
    }
}

#[async_trait]
impl SummaryProvider for WikipediaClient {
    #[instrument(skip(self))]
    async fn fetch_summary(&self, location: &str) -> DestinationSummary {
        match self.try_summary(location).await {
            Ok(summary) => {
                if summary.is_fallback() {
                    info!("No extract found for '{}': {}", location, summary);
                }
                summary
            }
            Err(e) => {
                warn!(timeout = e.is_timeout(), "Summary lookup for '{}' failed: {}", location, e);
                DestinationSummary::Unavailable
            }
        }
    }
}
