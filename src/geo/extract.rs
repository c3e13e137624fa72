//! Label/value extraction from the browserleaks.com page.
//!
//! The page lists facts as two-cell table rows: a label cell followed by a
//! value cell. A field is read by finding the first `<td>` whose text contains
//! the label and taking the text of the element right after it.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};
use strum::IntoEnumIterator;

use super::types::{GeoField, GeoRecord};
use crate::error_handling::LookupError;

const CELL_SELECTOR_STR: &str = "td";

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_with_fallback(CELL_SELECTOR_STR, "label cell lookup")
});

/// Parses the fetched page.
///
/// The HTML parser recovers from any markup error, so the only body it cannot
/// make a document of is an empty one.
///
/// # Errors
///
/// Returns `LookupError::MalformedResponse` if `body` is empty or whitespace.
pub fn parse_document(body: &str, url: &str) -> Result<Html, LookupError> {
    if body.trim().is_empty() {
        return Err(LookupError::MalformedResponse {
            url: url.to_string(),
            detail: "empty HTML document".to_string(),
        });
    }

    let document = Html::parse_document(body);
    if !document.errors.is_empty() {
        debug!(
            "HTML from {} parsed with {} recoverable errors",
            url,
            document.errors.len()
        );
    }
    Ok(document)
}

/// Returns the text of the element following the first cell containing `label`.
///
/// Matching is a case-sensitive substring test on the cell's full text, in
/// document order. Cells without a following sibling element are skipped, so
/// a layout cell wrapping the whole data table does not shadow the labelled
/// cell inside it. The value is trimmed. Returns an empty string when no cell
/// matches.
pub fn extract_field(document: &Html, label: &str) -> String {
    let value = document
        .select(&CELL_SELECTOR)
        .filter(|cell| cell.text().collect::<String>().contains(label))
        .find_map(|cell| cell.next_siblings().find_map(ElementRef::wrap));

    match value {
        Some(value) => value.text().collect::<String>().trim().to_string(),
        None => {
            debug!("No cell labelled '{}' with a value found", label);
            String::new()
        }
    }
}

/// Extracts every [`GeoField`] from the document, in field order.
///
/// Values are raw: missing fields are empty strings until normalized.
pub fn extract_geo_fields(document: &Html) -> GeoRecord {
    GeoField::iter()
        .map(|field| (field.label(), extract_field(document, field.label())))
        .collect()
}
