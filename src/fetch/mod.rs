//! HTTP fetching.
//!
//! This module sends the lookup requests over the shared client and applies
//! the uniform response policy: 2xx bodies are read in full, 429 becomes
//! `RateLimited`, every other status becomes `UnexpectedStatus`, and network
//! failures become `Transport`. Nothing is retried.

mod request;
mod response;

use log::debug;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, LookupError};
use crate::utils::sanitize::redact_api_key;

pub use request::Endpoint;

/// A successfully fetched response body.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    /// Request URL with the API key redacted
    pub url: String,
    /// Full response body
    pub body: String,
}

/// Fetches one endpoint for `config.ip` and returns its body.
///
/// The response is consumed here on every path, so the connection is released
/// whether the status check, the body read or a later decode fails.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `config` - Lookup configuration (address, API key, base URLs, timeout)
/// * `endpoint` - Which of the three endpoints to request
///
/// # Errors
///
/// - `LookupError::Transport` on connect/DNS/TLS failure, timeout or unreadable body
/// - `LookupError::RateLimited` on 429
/// - `LookupError::UnexpectedStatus` on any other non-2xx
/// - `LookupError::MalformedResponse` if the body exceeds the size limit
pub async fn fetch_endpoint(
    client: &reqwest::Client,
    config: &Config,
    endpoint: Endpoint,
) -> Result<FetchedBody, LookupError> {
    let url = endpoint.url(config)?;
    let display_url = redact_api_key(url.as_str());
    debug!("GET {}", display_url);

    let response = request::build_request(client, url, endpoint)
        .send()
        .await
        .map_err(|e| categorize_reqwest_error(e, &display_url, config.timeout_seconds))?;

    let response = response::check_status(response, &display_url)?;
    let body = response::read_body(response, &display_url, config.timeout_seconds).await?;

    Ok(FetchedBody {
        url: display_url,
        body,
    })
}
