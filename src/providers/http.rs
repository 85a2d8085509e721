//! Shared HTTP plumbing for the provider clients

use crate::error::FetchError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Build a client whose every request is bounded by `timeout`
pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Single GET attempt, decoded as JSON. Non-2xx statuses are errors.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let start = Instant::now();
    debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.json::<T>().await.map_err(classify_body_error)?;

    let elapsed = start.elapsed();
    debug!("HTTP {} in {:.3}s", status, elapsed.as_secs_f64());
    if elapsed > SLOW_RESPONSE {
        warn!("Slow provider response: {:.3}s from {}", elapsed.as_secs_f64(), url);
    }

    Ok(body)
}

/// Only a body that arrived but failed to decode is a parse error;
/// timeouts and broken connections while reading stay network errors.
fn classify_body_error(e: reqwest::Error) -> FetchError {
    if e.is_decode() && !e.is_timeout() {
        FetchError::Parse(e.to_string())
    } else {
        FetchError::Network(e)
    }
}
