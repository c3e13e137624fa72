//! Geo/ISP data structures.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The fields scraped from browserleaks.com, in report order.
///
/// The display string is both the label searched for on the page and the
/// row label in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum GeoField {
    /// Country name
    #[strum(serialize = "Country")]
    Country,
    /// Internet service provider
    #[strum(serialize = "ISP")]
    Isp,
    /// Organization the block is assigned to
    #[strum(serialize = "Organization")]
    Organization,
    /// Network usage category
    #[strum(serialize = "Usage Type")]
    UsageType,
}

impl GeoField {
    /// Page and report label, e.g. `"Usage Type"`.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Field name to value mapping that keeps insertion order.
///
/// Built in [`GeoField`] order, so the report lists Country, ISP,
/// Organization, Usage Type on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoRecord {
    entries: Vec<(String, String)>,
}

impl GeoRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GeoRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = GeoRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl IntoIterator for GeoRecord {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
