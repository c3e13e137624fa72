//! IP address validation.

use std::net::IpAddr;

/// Returns `true` if `candidate` is a textual IPv4 or IPv6 address.
///
/// Accepts dotted-quad IPv4, colon-hex IPv6 with `::` abbreviation and
/// embedded IPv4 (`::ffff:192.0.2.1`). Rejects everything else, including
/// surrounding whitespace, zone identifiers and zero-padded IPv4 octets.
/// No DNS resolution is performed.
///
/// # Arguments
///
/// * `candidate` - The string supplied with `--ip`
pub fn is_valid_ip(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}
