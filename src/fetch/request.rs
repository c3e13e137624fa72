//! Endpoint URLs and request construction.
//!
//! Each lookup hits one of three fixed endpoints. This module builds their
//! URLs from the configured base URLs and applies the matching request headers.

use std::fmt;

use reqwest::Url;

use crate::config::{
    Config, ACCEPT_HTML, ACCEPT_JSON, API_KEY_QUERY_PARAM, BROWSERLEAKS_PROVIDER_NAME,
    IPDATA_PROVIDER_NAME,
};
use crate::error_handling::LookupError;

/// The three outbound requests of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET {ipdata}/{ip}/asn?api-key={key}`
    Asn,
    /// `GET {ipdata}/{ip}/threat?api-key={key}`
    Threat,
    /// `GET {browserleaks}/ip/{ip}`
    BrowserLeaks,
}

impl Endpoint {
    /// Builds the request URL for `config.ip`.
    ///
    /// The address is added as a path segment, so IPv6 colons are kept
    /// verbatim and anything else is percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Usage` if the configured base URL cannot carry a
    /// path (e.g. `mailto:`) or does not parse.
    pub fn url(&self, config: &Config) -> Result<Url, LookupError> {
        let ip = config.ip.as_str();
        let (base, segments) = match self {
            Endpoint::Asn => (config.ipdata_base_url.as_str(), [ip, "asn"]),
            Endpoint::Threat => (config.ipdata_base_url.as_str(), [ip, "threat"]),
            Endpoint::BrowserLeaks => (config.browserleaks_base_url.as_str(), ["ip", ip]),
        };

        let mut url = Url::parse(base)
            .map_err(|e| LookupError::Usage(format!("invalid base URL '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Usage(format!("base URL '{base}' cannot carry a path")))?
            .pop_if_empty()
            .extend(segments);

        if self.needs_api_key() {
            url.query_pairs_mut()
                .append_pair(API_KEY_QUERY_PARAM, &config.api_key);
        }
        Ok(url)
    }

    /// Whether the endpoint authenticates with the ipdata.co API key.
    pub fn needs_api_key(&self) -> bool {
        matches!(self, Endpoint::Asn | Endpoint::Threat)
    }

    /// `Accept` header value for the endpoint.
    pub fn accept(&self) -> &'static str {
        match self {
            Endpoint::Asn | Endpoint::Threat => ACCEPT_JSON,
            Endpoint::BrowserLeaks => ACCEPT_HTML,
        }
    }

    /// Provider display name, used in progress logging.
    pub fn provider(&self) -> &'static str {
        match self {
            Endpoint::Asn | Endpoint::Threat => IPDATA_PROVIDER_NAME,
            Endpoint::BrowserLeaks => BROWSERLEAKS_PROVIDER_NAME,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Asn => f.write_str("ASN Data"),
            Endpoint::Threat => f.write_str("Threat Data"),
            Endpoint::BrowserLeaks => f.write_str("Geo/ISP Data"),
        }
    }
}

/// Builds a GET request for `url` with the endpoint's `Accept` header.
pub(crate) fn build_request(
    client: &reqwest::Client,
    url: Url,
    endpoint: Endpoint,
) -> reqwest::RequestBuilder {
    client
        .get(url)
        .header(reqwest::header::ACCEPT, endpoint.accept())
}
