//! HTTP header values.
//!
//! This module defines the `Accept` values sent to each provider and the
//! response header read on rate limiting.

/// Accept header for the ipdata.co JSON endpoints.
pub const ACCEPT_JSON: &str = "application/json";

/// Accept header for the browserleaks.com HTML page.
/// Mirrors what a desktop browser sends for a top-level navigation.
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// Accept-Language header sent with every request.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Response header carrying the rate-limit back-off on a 429.
pub const HEADER_RETRY_AFTER: &str = "Retry-After";
