// Report rendering tests.

use super::render::{BLOCKLISTS_HEADER, COLUMN_PADDING, ENTRY_SEPARATOR};
use super::*;
use crate::ipdata::BlocklistEntry;

fn asn() -> AsnRecord {
    AsnRecord {
        asn: "AS15169".to_string(),
        name: "Google LLC".to_string(),
        domain: "google.com".to_string(),
        route: "8.8.8.0/24".to_string(),
        kind: "hosting".to_string(),
    }
}

fn geo() -> GeoRecord {
    [
        ("Country", "United States"),
        ("ISP", "Google LLC"),
        ("Organization", "N/A"),
        ("Usage Type", "Data Center/Web Hosting/Transit"),
    ]
    .into_iter()
    .collect()
}

fn entry(name: &str, site: &str, kind: &str) -> BlocklistEntry {
    BlocklistEntry {
        name: name.to_string(),
        site: site.to_string(),
        kind: kind.to_string(),
    }
}

/// Trimmed cells of every bordered line, skipping free-text lines.
fn cell_rows(rendered: &str) -> Vec<Vec<String>> {
    rendered
        .lines()
        .filter(|line| line.ends_with('|'))
        .map(|line| {
            line.trim_end_matches('|')
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_report_row_order_without_blocklists() {
    let threat = ThreatRecord {
        is_datacenter: true,
        ..Default::default()
    };
    let rendered = render_report(&asn(), &threat, &geo());

    assert!(rendered.starts_with('\n'));
    assert_eq!(
        cell_rows(&rendered),
        vec![
            row(&["Category", "Value"]),
            row(&["ASN", "AS15169"]),
            row(&["ASN Name", "Google LLC"]),
            row(&["Country", "United States"]),
            row(&["ISP", "Google LLC"]),
            row(&["Organization", "N/A"]),
            row(&["Usage Type", "Data Center/Web Hosting/Transit"]),
            row(&["ASN Type", "hosting"]),
            row(&["Is TOR", "false"]),
            row(&["Is Proxy", "false"]),
            row(&["Is Datacenter", "true"]),
            row(&["Is Anonymous", "false"]),
            row(&["Is Known Attacker", "false"]),
            row(&["Is Known Abuser", "false"]),
            row(&["Is Threat", "false"]),
            row(&["Is Bogon", "false"]),
            row(&["Blocklists", "None"]),
        ]
    );
    assert!(!rendered.contains(BLOCKLISTS_HEADER));
}

#[test]
fn test_report_lists_blocklists_with_separators_between() {
    let threat = ThreatRecord {
        is_threat: true,
        blocklists: vec![
            entry("Spamhaus", "https://www.spamhaus.org", "ipv4"),
            entry("Blocklist.de", "https://www.blocklist.de", "ipv4"),
        ],
        ..Default::default()
    };
    let rendered = render_report(&asn(), &threat, &geo());

    assert!(rendered.contains("\nBlocklists Found:\n"));
    assert!(!rendered.contains("Blocklists  "));

    let rows = cell_rows(&rendered);
    let tail = &rows[rows.len() - 7..];
    assert_eq!(
        tail,
        &[
            row(&["Blocklist 1 Name", "Spamhaus"]),
            row(&["Site", "https://www.spamhaus.org"]),
            row(&["Type", "ipv4"]),
            row(&["", "---"]),
            row(&["Blocklist 2 Name", "Blocklist.de"]),
            row(&["Site", "https://www.blocklist.de"]),
            row(&["Type", "ipv4"]),
        ]
    );
    assert_eq!(rendered.matches(ENTRY_SEPARATOR).count(), 1);
    assert!(rendered.trim_end().ends_with('|'));
}

#[test]
fn test_single_blocklist_has_no_separator() {
    let threat = ThreatRecord {
        blocklists: vec![entry("Tor Exit Nodes", "https://check.torproject.org", "ipv4")],
        ..Default::default()
    };
    let rendered = render_report(&asn(), &threat, &geo());
    assert!(!rendered.contains(ENTRY_SEPARATOR));
    assert!(rendered.contains("Blocklist 1 Name"));
}

#[test]
fn test_columns_align_across_rows() {
    let rendered = render_report(&asn(), &ThreatRecord::default(), &geo());
    let first_borders: Vec<usize> = rendered
        .lines()
        .filter(|line| line.ends_with('|'))
        .map(|line| line.find('|').unwrap_or(0))
        .collect();

    // "Is Known Attacker" is the widest label
    let expected = "Is Known Attacker".len() + COLUMN_PADDING;
    assert!(first_borders.iter().all(|&b| b == expected), "{first_borders:?}");
}

#[test]
fn test_lookup_report_render_matches_free_function() {
    let report = LookupReport {
        ip: "8.8.8.8".to_string(),
        asn: asn(),
        threat: ThreatRecord::default(),
        geo: geo(),
    };
    assert_eq!(
        report.render(),
        render_report(&report.asn, &report.threat, &report.geo)
    );
}

#[test]
fn test_blocklist_section_layout() {
    let threat = ThreatRecord {
        blocklists: vec![entry("A", "s", "t"), entry("B", "u", "v")],
        ..Default::default()
    };
    let rendered = render_report(&asn(), &threat, &geo());

    let section = rendered
        .split_once("Blocklists Found:\n")
        .map(|(_, rest)| rest)
        .expect("section present");
    assert_eq!(
        section,
        "Blocklist 1 Name  |A    |\n\
         Site              |s    |\n\
         Type              |t    |\n\
         \x20                 |---  |\n\
         Blocklist 2 Name  |B    |\n\
         Site              |u    |\n\
         Type              |v    |\n"
    );
}

#[test]
fn test_fact_rows_padded_to_widest_cell() {
    let rendered = render_report(&asn(), &ThreatRecord::default(), &geo());
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "");
    // Value column fits "Data Center/Web Hosting/Transit" plus padding
    let value_width = "Data Center/Web Hosting/Transit".len() + COLUMN_PADDING;
    let label_width = "Is Known Attacker".len() + COLUMN_PADDING;
    assert_eq!(
        lines[1],
        format!("{:<label_width$}|{:<value_width$}|", "Category", "Value")
    );
    assert_eq!(
        *lines.last().expect("rows present"),
        format!("{:<label_width$}|{:<value_width$}|", "Blocklists", "None")
    );
}
