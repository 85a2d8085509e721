//! Integration tests for the HTTP providers using wiremock.
//!
//! Every failure mode must come back as the documented fallback value,
//! never as an error.

use std::time::Duration;

use serde_json::json;
use travelbrief::models::{NO_EXTRACT_TEXT, UNAVAILABLE_TEXT};
use travelbrief::{
    Coordinates, DestinationSummary, ForecastProvider, LocationResolver, OpenMeteoClient,
    SummaryProvider, WikipediaClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn wikipedia(server: &MockServer) -> WikipediaClient {
    WikipediaClient::new(format!("{}/w/api.php", server.uri()), TIMEOUT, "travelbrief-tests")
        .unwrap()
}

fn open_meteo(server: &MockServer) -> OpenMeteoClient {
    OpenMeteoClient::new(format!("{}/v1", server.uri()), TIMEOUT, "travelbrief-tests").unwrap()
}

#[tokio::test]
async fn test_resolve_returns_first_coordinate_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("format", "json"))
        .and(query_param("titles", "Paris"))
        .and(query_param("prop", "coordinates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": {"pages": {"22989": {
                "pageid": 22989, "ns": 0, "title": "Paris",
                "coordinates": [{"lat": 48.85, "lon": 2.35, "primary": "", "globe": "earth"}]
            }}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let coordinates = wikipedia(&server).resolve("Paris").await;
    assert_eq!(coordinates, Coordinates::new(48.85, 2.35));
}

#[tokio::test]
async fn test_resolve_skips_pages_without_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {
                "900": {"pageid": 900, "title": "Georgia"},
                "12": {"pageid": 12, "title": "Georgia (country)",
                       "coordinates": [{"lat": 42.0, "lon": 43.5}]}
            }}
        })))
        .mount(&server)
        .await;

    let coordinates = wikipedia(&server).resolve("Georgia").await;
    assert_eq!(coordinates, Coordinates::new(42.0, 43.5));
}

#[tokio::test]
async fn test_resolve_without_match_is_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"-1": {"ns": 0, "title": "Nonexistent Place Xyzzy", "missing": ""}}}
        })))
        .mount(&server)
        .await;

    let coordinates = wikipedia(&server).resolve("Nonexistent Place Xyzzy").await;
    assert_eq!(coordinates, Coordinates::UNRESOLVED);
    assert!(!coordinates.is_resolved());
}

#[tokio::test]
async fn test_resolve_on_server_error_is_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(wikipedia(&server).resolve("Paris").await, Coordinates::UNRESOLVED);
}

#[tokio::test]
async fn test_resolve_on_malformed_body_is_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    assert_eq!(wikipedia(&server).resolve("Paris").await, Coordinates::UNRESOLVED);
}

#[tokio::test]
async fn test_resolve_on_timeout_is_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"query": {"pages": {}}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = WikipediaClient::new(
        format!("{}/w/api.php", server.uri()),
        Duration::from_millis(100),
        "travelbrief-tests",
    )
    .unwrap();

    assert_eq!(client.resolve("Paris").await, Coordinates::UNRESOLVED);
}

#[tokio::test]
async fn test_summary_returns_extract() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("titles", "Kyoto"))
        .and(query_param("prop", "extracts"))
        .and(query_param("exintro", "true"))
        .and(query_param("explaintext", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"1": {
                "pageid": 1, "title": "Kyoto",
                "extract": "Kyoto is the capital city of Kyoto Prefecture in Japan."
            }}}
        })))
        .mount(&server)
        .await;

    let summary = wikipedia(&server).fetch_summary("Kyoto").await;
    assert_eq!(
        summary,
        DestinationSummary::Extract("Kyoto is the capital city of Kyoto Prefecture in Japan.".into())
    );
}

#[tokio::test]
async fn test_summary_uses_first_page_with_extract_content() {
    let server = MockServer::start().await;

    // page ids are deliberately out of sorted order
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {
                "-1": {"ns": 0, "title": "Springfield", "missing": ""},
                "30": {"pageid": 30, "title": "Springfield (disambiguation)", "extract": ""},
                "12": {"pageid": 12, "title": "Springfield, Illinois", "extract": "Third."},
                "5": {"pageid": 5, "title": "Springfield, Oregon", "extract": "Fourth."}
            }}
        })))
        .mount(&server)
        .await;

    let summary = wikipedia(&server).fetch_summary("Springfield").await;
    assert_eq!(summary, DestinationSummary::Extract("Third.".into()));
}

#[tokio::test]
async fn test_summary_page_without_extract() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"-1": {"ns": 0, "title": "Nowhere", "missing": ""}}}
        })))
        .mount(&server)
        .await;

    let summary = wikipedia(&server).fetch_summary("Nowhere").await;
    assert_eq!(summary, DestinationSummary::NoExtract);
    assert_eq!(summary.as_str(), NO_EXTRACT_TEXT);
}

#[tokio::test]
async fn test_summary_without_pages_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"batchcomplete": ""})))
        .mount(&server)
        .await;

    let summary = wikipedia(&server).fetch_summary("Anywhere").await;
    assert_eq!(summary, DestinationSummary::Unavailable);
}

#[tokio::test]
async fn test_summary_transport_error_is_distinct_from_missing_extract() {
    // nothing listens on port 1
    let client =
        WikipediaClient::new("http://127.0.0.1:1/w/api.php", TIMEOUT, "travelbrief-tests")
            .unwrap();
    let summary = client.fetch_summary("Paris").await;

    assert_eq!(summary.as_str(), UNAVAILABLE_TEXT);
    assert_ne!(summary.as_str(), NO_EXTRACT_TEXT);
}

#[tokio::test]
async fn test_forecast_passes_daily_series_through() {
    let server = MockServer::start().await;

    let daily = json!({
        "time": ["2025-06-01", "2025-06-02"],
        "temperature_2m_max": [24.1, 21.0],
        "temperature_2m_min": [15.0, 14.2],
        "precipitation_sum": [0.0, 3.4],
        "weathercode": [0, 63]
    });

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param(
            "daily",
            "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": 48.86,
            "longitude": 2.34,
            "timezone": "Europe/Paris",
            "daily_units": {"temperature_2m_max": "°C"},
            "daily": daily
        })))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = open_meteo(&server)
        .fetch_forecast(Coordinates::new(48.85, 2.35))
        .await;

    assert_eq!(serde_json::to_value(&forecast).unwrap(), daily);
    assert_eq!(forecast.dates(), vec!["2025-06-01", "2025-06-02"]);
}

#[tokio::test]
async fn test_forecast_on_server_error_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let forecast = open_meteo(&server)
        .fetch_forecast(Coordinates::new(48.85, 2.35))
        .await;
    assert!(forecast.is_unavailable());
    assert_eq!(serde_json::to_value(&forecast).unwrap(), json!({}));
}

#[tokio::test]
async fn test_forecast_without_daily_block_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90°."
        })))
        .mount(&server)
        .await;

    let forecast = open_meteo(&server)
        .fetch_forecast(Coordinates::new(48.85, 2.35))
        .await;
    assert!(forecast.is_unavailable());
}
