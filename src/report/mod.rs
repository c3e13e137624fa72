//! Report rendering.
//!
//! Merges the ASN, threat and geo/ISP results into the table printed on
//! stdout.

mod render;

use crate::geo::GeoRecord;
use crate::ipdata::{AsnRecord, ThreatRecord};

pub use render::render_report;

/// Results of a completed lookup.
///
/// Only ever built when all three sources succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    /// Address that was looked up
    pub ip: String,
    /// ipdata.co ASN record
    pub asn: AsnRecord,
    /// ipdata.co threat record
    pub threat: ThreatRecord,
    /// Normalized browserleaks.com fields
    pub geo: GeoRecord,
}

impl LookupReport {
    /// Renders the report table (see [`render_report`]).
    pub fn render(&self) -> String {
        render_report(&self.asn, &self.threat, &self.geo)
    }
}

#[cfg(test)]
mod tests;
