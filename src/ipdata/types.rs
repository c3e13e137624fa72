//! ipdata.co response shapes.
//!
//! Field names match the JSON keys exactly. Unknown keys are ignored; missing
//! keys and explicit `null`s take the type's zero value.

use serde::{Deserialize, Deserializer};

/// ASN record from `GET /{ip}/asn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AsnRecord {
    /// AS identifier, e.g. `AS15169`
    #[serde(deserialize_with = "null_as_default")]
    pub asn: String,
    /// Operator name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Operator domain
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    /// Announced route in CIDR notation
    #[serde(deserialize_with = "null_as_default")]
    pub route: String,
    /// Network category (`hosting`, `isp`, `business`, ...)
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Threat record from `GET /{ip}/threat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThreatRecord {
    /// Tor exit node
    #[serde(deserialize_with = "null_as_default")]
    pub is_tor: bool,
    /// Known proxy
    #[serde(deserialize_with = "null_as_default")]
    pub is_proxy: bool,
    /// Hosted in a datacenter
    #[serde(deserialize_with = "null_as_default")]
    pub is_datacenter: bool,
    /// Tor or proxy
    #[serde(deserialize_with = "null_as_default")]
    pub is_anonymous: bool,
    /// Source of attacks
    #[serde(deserialize_with = "null_as_default")]
    pub is_known_attacker: bool,
    /// Source of abuse reports
    #[serde(deserialize_with = "null_as_default")]
    pub is_known_abuser: bool,
    /// Attacker or abuser
    #[serde(deserialize_with = "null_as_default")]
    pub is_threat: bool,
    /// Unassigned or reserved address
    #[serde(deserialize_with = "null_as_default")]
    pub is_bogon: bool,
    /// Lists that flag the address, in the order the API returned them
    #[serde(deserialize_with = "null_as_default")]
    pub blocklists: Vec<BlocklistEntry>,
}

impl ThreatRecord {
    /// The eight flags with their display labels, in report order.
    pub fn flags(&self) -> [(&'static str, bool); 8] {
        [
            ("Is TOR", self.is_tor),
            ("Is Proxy", self.is_proxy),
            ("Is Datacenter", self.is_datacenter),
            ("Is Anonymous", self.is_anonymous),
            ("Is Known Attacker", self.is_known_attacker),
            ("Is Known Abuser", self.is_known_abuser),
            ("Is Threat", self.is_threat),
            ("Is Bogon", self.is_bogon),
        ]
    }
}

/// One blocklist that flags the address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlocklistEntry {
    /// List name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// List homepage
    #[serde(deserialize_with = "null_as_default")]
    pub site: String,
    /// List category, e.g. `ipv4`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
