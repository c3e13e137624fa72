//! Geolocation and ISP data scraped from browserleaks.com.
//!
//! This module fetches the HTML page for an address, extracts a fixed set of
//! labelled fields and substitutes `"N/A"` for any the page left out.

mod extract;
mod lookup;
mod normalize;
mod types;

// Re-export public API
pub use lookup::fetch_geo;
pub use types::{GeoField, GeoRecord};
