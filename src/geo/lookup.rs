//! browserleaks.com lookup.

use log::{debug, info};

use super::extract::{extract_geo_fields, parse_document};
use super::normalize::normalize;
use super::types::GeoRecord;
use crate::config::Config;
use crate::error_handling::LookupError;
use crate::fetch::{fetch_endpoint, Endpoint};

/// Fetches the browserleaks.com page for `config.ip` and returns its
/// normalized geo/ISP fields.
///
/// # Errors
///
/// Any fetch error, or `LookupError::MalformedResponse` for an empty page.
/// Fields missing from the page are not an error; they come back as `"N/A"`.
pub async fn fetch_geo(
    client: &reqwest::Client,
    config: &Config,
) -> Result<GeoRecord, LookupError> {
    let endpoint = Endpoint::BrowserLeaks;
    info!("Fetching data from {}.", endpoint.provider());

    let fetched = fetch_endpoint(client, config, endpoint).await?;
    let document = parse_document(&fetched.body, &fetched.url)?;
    let raw = extract_geo_fields(&document);

    let missing = raw.iter().filter(|(_, v)| v.is_empty()).count();
    if missing > 0 {
        debug!(
            "{} of {} geo fields missing from {}",
            missing,
            raw.len(),
            fetched.url
        );
    }

    Ok(normalize(raw))
}
