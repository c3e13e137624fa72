//! HTTP client initialization.
//!
//! This module builds the single HTTP client shared by every lookup request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all three lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A default `Accept-Language` header
/// - Total request timeout from the configuration (10s by default)
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// No retry policy is attached; a failed request is final.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(crate::config::ACCEPT_LANGUAGE),
    );

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(client)
}
