//! HTTP response status checks and body extraction.

use log::debug;
use reqwest::StatusCode;

use crate::config::{HEADER_RETRY_AFTER, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, LookupError};

/// Checks the response status, passing 2xx responses through.
///
/// # Arguments
///
/// * `response` - The HTTP response, returned unchanged on success
/// * `url` - The redacted request URL, for error messages
///
/// # Errors
///
/// - `LookupError::RateLimited` for 429, carrying the `Retry-After` header if present
/// - `LookupError::UnexpectedStatus` for every other non-2xx status
pub(crate) fn check_status(
    response: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, LookupError> {
    let status = response.status();
    debug!("Response status {} from {}", status.as_u16(), url);

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(HEADER_RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        return Err(LookupError::RateLimited {
            url: url.to_string(),
            retry_after,
        });
    }

    Err(LookupError::UnexpectedStatus {
        url: url.to_string(),
        code: status.as_u16(),
    })
}

/// Reads the whole response body as text, consuming the response.
///
/// The body is streamed chunk by chunk with a running size cap, so a body
/// without `Content-Length` is cut off as soon as it passes
/// `MAX_RESPONSE_BODY_SIZE`. Invalid UTF-8 is replaced, as `Response::text` does.
///
/// # Errors
///
/// - `LookupError::Transport` if the body cannot be read
/// - `LookupError::MalformedResponse` if the body is too large
pub(crate) async fn read_body(
    mut response: reqwest::Response,
    url: &str,
    timeout_secs: u64,
) -> Result<String, LookupError> {
    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE as u64 {
            return Err(too_large(url, length as usize));
        }
    }

    // Stream with size cap
    let mut buf: Vec<u8> = Vec::with_capacity(16 * 1024);
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| categorize_reqwest_error(e, url, timeout_secs))?
    {
        if buf.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            debug!(
                "Body from {} exceeds the limit (aborting at {} bytes)",
                url,
                buf.len() + chunk.len()
            );
            return Err(too_large(url, buf.len() + chunk.len()));
        }
        buf.extend_from_slice(&chunk);
    }

    debug!("Body length for {}: {} bytes", url, buf.len());
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn too_large(url: &str, length: usize) -> LookupError {
    LookupError::MalformedResponse {
        url: url.to_string(),
        detail: format!(
            "body of at least {} bytes exceeds the {} byte limit",
            length, MAX_RESPONSE_BODY_SIZE
        ),
    }
}
