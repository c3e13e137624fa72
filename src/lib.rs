//! ip_checker library: IP address reputation and ownership lookup
//!
//! This library validates an IP address, then gathers three views of it:
//! - ASN ownership from the ipdata.co ASN endpoint
//! - Threat flags and blocklists from the ipdata.co threat endpoint
//! - Country, ISP, organization and usage type scraped from browserleaks.com
//!
//! The results are merged into a [`LookupReport`] that renders as a
//! `|`-bordered table.
//!
//! # Example
//!
//! ```no_run
//! use ip_checker::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ip: "8.8.8.8".to_string(),
//!     api_key: "your-ipdata-key".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! print!("{}", report.render());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
mod geo;
pub mod initialization;
mod ipdata;
mod report;
mod utils;

// Re-export public API
pub use app::is_valid_ip;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use geo::{GeoField, GeoRecord};
pub use ipdata::{AsnRecord, BlocklistEntry, ThreatRecord};
pub use report::{render_report, LookupReport};
pub use run::run_lookup;

// Internal run module (contains the lookup sequence)
mod run {
    use std::time::Instant;

    use log::debug;

    use crate::config::Config;
    use crate::error_handling::LookupError;
    use crate::geo::fetch_geo;
    use crate::initialization::init_client;
    use crate::ipdata::{fetch_asn, fetch_threat};
    use crate::report::LookupReport;

    /// Runs a full lookup with the provided configuration.
    ///
    /// This is the main entry point for the library. The configuration is
    /// validated before any request is made; the three sources are then
    /// queried one after another (ASN, threat, geo/ISP) over a single client.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. No partial report is produced:
    /// - `LookupError::Usage` / `LookupError::InvalidIp` from validation
    /// - `LookupError::Initialization` if the HTTP client cannot be built
    /// - Any transport, status or decoding error from the three fetches
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ip_checker::{run_lookup, Config, LookupError};
    ///
    /// # async fn example() -> Result<(), LookupError> {
    /// let config = Config {
    ///     ip: "2001:4860:4860::8888".to_string(),
    ///     api_key: "your-ipdata-key".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = run_lookup(config).await?;
    /// println!("ASN: {}", report.asn.asn);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(config: Config) -> Result<LookupReport, LookupError> {
        config.validate()?;

        let start = Instant::now();
        let client = init_client(&config)?;

        let asn = fetch_asn(&client, &config).await?;
        let threat = fetch_threat(&client, &config).await?;
        let geo = fetch_geo(&client, &config).await?;

        debug!(
            "Lookup for {} completed in {:.2}s",
            config.ip,
            start.elapsed().as_secs_f64()
        );

        Ok(LookupReport {
            ip: config.ip,
            asn,
            threat,
            geo,
        })
    }
}
