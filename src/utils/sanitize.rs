//! Utilities for sanitizing URLs and response snippets before they are logged.
//!
//! The ipdata.co API key travels in the query string, so every URL that ends
//! up in a log line or an error message goes through [`redact_api_key`].

use url::Url;

use crate::config::{API_KEY_QUERY_PARAM, REDACTED_PLACEHOLDER};

/// Replaces the value of the `api-key` query parameter with `REDACTED`.
///
/// URLs without the parameter come back unchanged. If the URL cannot be parsed
/// the whole query string is dropped rather than risk echoing the key.
///
/// # Arguments
///
/// * `raw` - The URL as requested
pub fn redact_api_key(raw: &str) -> String {
    let mut parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            return match raw.split_once('?') {
                Some((base, _)) => format!("{base}?{REDACTED_PLACEHOLDER}"),
                None => raw.to_string(),
            };
        }
    };

    if !parsed.query_pairs().any(|(k, _)| k == API_KEY_QUERY_PARAM) {
        return raw.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            if k == API_KEY_QUERY_PARAM {
                (k.into_owned(), REDACTED_PLACEHOLDER.to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

/// Sanitizes text by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can
/// garble terminal output when a response body is echoed into a log line.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Returns the first `max_chars` characters of `body`, sanitized, for debug logging.
pub fn body_preview(body: &str, max_chars: usize) -> String {
    let preview: String = body.chars().take(max_chars).collect();
    sanitize_error_message(&preview)
}
