//! ipdata.co lookups.
//!
//! Fetches the ASN and threat endpoints and decodes their JSON bodies into
//! fixed record shapes. A body that is not valid JSON for the shape fails the
//! whole lookup; omitted fields do not.

mod types;

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::config::{Config, MAX_BODY_PREVIEW_CHARS};
use crate::error_handling::LookupError;
use crate::fetch::{fetch_endpoint, Endpoint, FetchedBody};
use crate::utils::sanitize::body_preview;

pub use types::{AsnRecord, BlocklistEntry, ThreatRecord};

/// Decodes a fetched JSON body into `T`.
///
/// # Errors
///
/// Returns `LookupError::MalformedResponse` if the body is not valid JSON or a
/// field has the wrong JSON type.
pub fn decode_json<T: DeserializeOwned>(fetched: &FetchedBody) -> Result<T, LookupError> {
    serde_json::from_str(&fetched.body).map_err(|e| {
        debug!(
            "Undecodable body from {} (first {} chars): {}",
            fetched.url,
            MAX_BODY_PREVIEW_CHARS,
            body_preview(&fetched.body, MAX_BODY_PREVIEW_CHARS)
        );
        LookupError::MalformedResponse {
            url: fetched.url.clone(),
            detail: format!("failed to decode JSON: {e}"),
        }
    })
}

/// Fetches and decodes the ASN record for `config.ip`.
pub async fn fetch_asn(
    client: &reqwest::Client,
    config: &Config,
) -> Result<AsnRecord, LookupError> {
    fetch_and_decode(client, config, Endpoint::Asn).await
}

/// Fetches and decodes the threat record for `config.ip`.
pub async fn fetch_threat(
    client: &reqwest::Client,
    config: &Config,
) -> Result<ThreatRecord, LookupError> {
    let threat: ThreatRecord = fetch_and_decode(client, config, Endpoint::Threat).await?;
    debug!(
        "Threat data for {}: {} blocklist entries",
        config.ip,
        threat.blocklists.len()
    );
    Ok(threat)
}

async fn fetch_and_decode<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &Config,
    endpoint: Endpoint,
) -> Result<T, LookupError> {
    info!("Fetching {} from {}.", endpoint, endpoint.provider());
    let fetched = fetch_endpoint(client, config, endpoint).await?;
    decode_json(&fetched)
}
