//! Placeholder substitution for missing geo/ISP values.

use super::types::GeoRecord;
use crate::config::MISSING_VALUE_SENTINEL;

/// Replaces every empty value with `"N/A"`, leaving the rest untouched.
///
/// Keys and their order are preserved. Applying it twice changes nothing
/// more than applying it once.
pub fn normalize(raw: GeoRecord) -> GeoRecord {
    raw.into_iter()
        .map(|(key, value)| {
            if value.is_empty() {
                (key, MISSING_VALUE_SENTINEL.to_string())
            } else {
                (key, value)
            }
        })
        .collect()
}
