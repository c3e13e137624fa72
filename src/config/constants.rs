//! Configuration constants.
//!
//! This module defines the endpoints, timeouts, size limits and display
//! constants used throughout the application.

/// Base URL of the ipdata.co API (ASN and threat endpoints).
pub const IPDATA_BASE_URL: &str = "https://api.ipdata.co";
/// Base URL of browserleaks.com (geolocation/ISP scrape).
pub const BROWSERLEAKS_BASE_URL: &str = "https://browserleaks.com";

/// Display name of the JSON provider, used in progress logging.
pub const IPDATA_PROVIDER_NAME: &str = "ipdata.co";
/// Display name of the HTML provider, used in progress logging.
pub const BROWSERLEAKS_PROVIDER_NAME: &str = "browserleaks.com";

/// Per-request timeout in seconds, shared by every outbound call.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// browserleaks.com serves a reduced page to obvious non-browser clients, so the
/// client presents itself as a current desktop Chrome.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum response body size in bytes (2MB).
/// Larger bodies are rejected as malformed rather than decoded.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum body preview length in characters for debug logging (500 chars)
pub const MAX_BODY_PREVIEW_CHARS: usize = 500;

/// Query parameter carrying the ipdata.co API key.
pub const API_KEY_QUERY_PARAM: &str = "api-key";
/// Replacement for the API key wherever a URL is logged or shown in an error.
pub const REDACTED_PLACEHOLDER: &str = "REDACTED";

/// Placeholder shown for geo/ISP fields the page did not provide.
pub const MISSING_VALUE_SENTINEL: &str = "N/A";

// Environment variables
/// API key for ipdata.co (required).
pub const ENV_API_KEY: &str = "IPDATA_API_KEY";
/// Overrides [`IPDATA_BASE_URL`].
pub const ENV_IPDATA_BASE_URL: &str = "IPDATA_BASE_URL";
/// Overrides [`BROWSERLEAKS_BASE_URL`].
pub const ENV_BROWSERLEAKS_BASE_URL: &str = "BROWSERLEAKS_BASE_URL";
/// Log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const ENV_LOG_LEVEL: &str = "IP_CHECKER_LOG_LEVEL";
/// Log format (`plain`, `json`).
pub const ENV_LOG_FORMAT: &str = "IP_CHECKER_LOG_FORMAT";
