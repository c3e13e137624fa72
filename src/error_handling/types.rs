//! Error type definitions.
//!
//! This module defines the fatal lookup error taxonomy and the errors raised
//! while setting up shared resources.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Every way a lookup can fail.
///
/// None of these are recovered from: the first one raised ends the run with a
/// non-zero exit status and no table is printed. URLs stored in the variants
/// are already redacted (see [`crate::utils::sanitize::redact_api_key`]).
#[derive(Error, Debug)]
pub enum LookupError {
    /// Bad or missing input (flag, environment variable, configuration value).
    #[error("usage error: {0}")]
    Usage(String),

    /// The `--ip` value is not a textual IPv4/IPv6 address.
    #[error("Invalid IP address: {0}")]
    InvalidIp(String),

    /// Connection, DNS, TLS, timeout or body-read failure.
    #[error("Failed to fetch data from {url}: {detail}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying cause, flattened from the error chain
        detail: String,
    },

    /// The provider answered 429 Too Many Requests.
    #[error("Rate limit exceeded: {} ({url})", retry_hint(.retry_after.as_deref()))]
    RateLimited {
        /// Requested URL
        url: String,
        /// Raw `Retry-After` header value, if the provider sent one
        retry_after: Option<String>,
    },

    /// Any other non-2xx status.
    #[error("Unexpected status: received status code {code} from {url}")]
    UnexpectedStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        code: u16,
    },

    /// The body was not valid JSON for the expected shape, or not a usable HTML document.
    #[error("Malformed response from {url}: {detail}")]
    MalformedResponse {
        /// Requested URL
        url: String,
        /// Decoder or parser message
        detail: String,
    },

    /// Logger or HTTP client could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

fn retry_hint(retry_after: Option<&str>) -> String {
    match retry_after {
        Some(value) => format!("try again after {value} seconds"),
        None => "no Retry-After given".to_string(),
    }
}
