// Shared test helpers for mock provider setup and fixture data.
//
// Both providers are served from one MockServer: ipdata.co paths are
// `/{ip}/asn` and `/{ip}/threat`, browserleaks.com is `/ip/{ip}`.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TEST_IP: &str = "8.8.8.8";
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "integration-test-key";

#[allow(dead_code)]
pub const ASN_BODY: &str = r#"{
    "asn": "AS15169",
    "name": "Google LLC",
    "domain": "google.com",
    "route": "8.8.8.0/24",
    "type": "hosting"
}"#;

#[allow(dead_code)]
pub const THREAT_BODY: &str = r#"{
    "is_tor": false,
    "is_proxy": false,
    "is_datacenter": true,
    "is_anonymous": false,
    "is_known_attacker": false,
    "is_known_abuser": true,
    "is_threat": true,
    "is_bogon": false,
    "blocklists": [
        {"name": "Spamhaus", "site": "https://www.spamhaus.org", "type": "ipv4"},
        {"name": "Blocklist.de", "site": "https://www.blocklist.de", "type": "ipv4"}
    ]
}"#;

/// Page with Country and ISP only; Organization and Usage Type are absent.
#[allow(dead_code)]
pub const GEO_PAGE: &str = r#"<html><body><table>
<tr><td>IP Address</td><td>8.8.8.8</td></tr>
<tr><td>Country</td><td>United States</td></tr>
<tr><td>ISP</td><td>Google LLC</td></tr>
</table></body></html>"#;

/// Page with all four geo fields present.
#[allow(dead_code)]
pub const GEO_PAGE_FULL: &str = r#"<html><body><table>
<tr><td>IP Address</td><td>8.8.8.8</td></tr>
<tr><td>Country</td><td>United States</td></tr>
<tr><td>ISP</td><td>Google LLC</td></tr>
<tr><td>Organization</td><td>Google Public DNS</td></tr>
<tr><td>Usage Type</td><td>Data Center/Web Hosting/Transit</td></tr>
</table></body></html>"#;

/// Mounts successful responses for all three endpoints, each expected once.
#[allow(dead_code)]
pub async fn mount_all_ok(server: &MockServer) {
    mount_ipdata_ok(server).await;
    mount_geo(server, ResponseTemplate::new(200).set_body_string(GEO_PAGE)).await;
}

/// Mounts successful ASN and threat responses, each expected once.
#[allow(dead_code)]
pub async fn mount_ipdata_ok(server: &MockServer) {
    mount_json(server, "asn", ResponseTemplate::new(200).set_body_string(ASN_BODY)).await;
    mount_json(
        server,
        "threat",
        ResponseTemplate::new(200).set_body_string(THREAT_BODY),
    )
    .await;
}

/// Mounts `response` for the ipdata.co `kind` endpoint (`asn` or `threat`).
#[allow(dead_code)]
pub async fn mount_json(server: &MockServer, kind: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{TEST_IP}/{kind}")))
        .and(query_param("api-key", TEST_API_KEY))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts `response` for the browserleaks.com page.
#[allow(dead_code)]
pub async fn mount_geo(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/ip/{TEST_IP}")))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Asserts that `path` was never requested.
#[allow(dead_code)]
pub async fn mount_never(server: &MockServer, path_str: String) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
