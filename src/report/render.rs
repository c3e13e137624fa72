//! Report layout.
//!
//! Facts are laid out with `tabled`: no frame, each cell left-aligned, padded
//! to its column's widest cell plus [`COLUMN_PADDING`] and closed by a `|`.
//! The blocklist entries form a second table under a `Blocklists Found:`
//! line, so their column widths are independent of the fact rows above.

use tabled::builder::Builder;
use tabled::settings::{Padding, Style};

use crate::geo::GeoRecord;
use crate::ipdata::{AsnRecord, ThreatRecord};

/// Spaces after the widest cell of every column.
pub const COLUMN_PADDING: usize = 2;
/// Row shown instead of the blocklist section when no list flags the address.
pub const NO_BLOCKLISTS_VALUE: &str = "None";
/// Pseudo-header introducing the blocklist entries.
pub const BLOCKLISTS_HEADER: &str = "Blocklists Found:";
/// Cell marking the boundary between two blocklist entries.
pub const ENTRY_SEPARATOR: &str = "---";

const CELL_BORDER: char = '|';

/// Lays out the merged lookup results as a table.
///
/// Row order: header, ASN, ASN Name, each geo field in record order, ASN Type,
/// the eight threat flags, then the blocklist section. Output starts with a
/// blank line so the table stands apart from the log lines above it.
pub fn render_report(asn: &AsnRecord, threat: &ThreatRecord, geo: &GeoRecord) -> String {
    let mut facts = Builder::default();
    facts.push_record(row("Category", "Value"));
    facts.push_record(row("ASN", &asn.asn));
    facts.push_record(row("ASN Name", &asn.name));
    for (field, value) in geo.iter() {
        facts.push_record(row(field, value));
    }
    facts.push_record(row("ASN Type", &asn.kind));
    for (label, flag) in threat.flags() {
        facts.push_record(row(label, flag.to_string()));
    }
    if threat.blocklists.is_empty() {
        facts.push_record(row("Blocklists", NO_BLOCKLISTS_VALUE));
    }

    let mut out = String::from("\n");
    out.push_str(&bordered(facts));
    out.push('\n');

    if !threat.blocklists.is_empty() {
        let mut entries = Builder::default();
        for (i, entry) in threat.blocklists.iter().enumerate() {
            if i > 0 {
                entries.push_record(row("", ENTRY_SEPARATOR));
            }
            entries.push_record(row(format!("Blocklist {} Name", i + 1), &entry.name));
            entries.push_record(row("Site", &entry.site));
            entries.push_record(row("Type", &entry.kind));
        }

        out.push_str(BLOCKLISTS_HEADER);
        out.push('\n');
        out.push_str(&bordered(entries));
        out.push('\n');
    }

    out
}

fn row(label: impl Into<String>, value: impl Into<String>) -> [String; 2] {
    [label.into(), value.into()]
}

fn bordered(rows: Builder) -> String {
    rows.build()
        .with(Style::empty().vertical(CELL_BORDER).right(CELL_BORDER))
        .with(Padding::new(0, COLUMN_PADDING, 0, 0))
        .to_string()
}
