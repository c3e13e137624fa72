//! Error categorization.
//!
//! This module turns `reqwest` failures into `LookupError::Transport` with a
//! readable cause.

use std::error::Error as StdError;

use super::types::LookupError;

/// Categorizes a `reqwest::Error` into a transport failure.
///
/// Status codes never reach this function (the fetcher checks them itself), so
/// every error here is network level: timeout, connect, redirect loop or a
/// body that could not be read.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `url` - The redacted URL that was requested
/// * `timeout_secs` - The client timeout, reported for timeouts
pub fn categorize_reqwest_error(
    error: reqwest::Error,
    url: &str,
    timeout_secs: u64,
) -> LookupError {
    // The URL inside the error carries the API key
    let error = error.without_url();

    let detail = if error.is_timeout() {
        format!("request timed out after {timeout_secs} seconds")
    } else if error.is_connect() {
        format!("connection failed: {}", root_cause(&error))
    } else if error.is_redirect() {
        format!("redirect error: {}", root_cause(&error))
    } else if error.is_body() || error.is_decode() {
        format!("failed to read response body: {}", root_cause(&error))
    } else {
        error_chain(&error)
    };

    LookupError::Transport {
        url: url.to_string(),
        detail,
    }
}

fn root_cause(error: &(dyn StdError + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
