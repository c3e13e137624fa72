//! Configuration types.
//!
//! This module defines the log enums and the library `Config`, plus the
//! environment-driven construction used by the binary.

use clap::ValueEnum;

use crate::app::is_valid_ip;
use crate::config::constants::{
    BROWSERLEAKS_BASE_URL, DEFAULT_USER_AGENT, ENV_API_KEY, ENV_BROWSERLEAKS_BASE_URL,
    ENV_IPDATA_BASE_URL, ENV_LOG_FORMAT, ENV_LOG_LEVEL, IPDATA_BASE_URL, REQUEST_TIMEOUT_SECS,
};
use crate::error_handling::LookupError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration for a single lookup.
///
/// Can be constructed programmatically (tests point the base URLs at a mock
/// server) or from the process environment with [`Config::from_env`].
///
/// # Examples
///
/// ```no_run
/// use ip_checker::Config;
///
/// let config = Config {
///     ip: "8.8.8.8".to_string(),
///     api_key: "secret".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to look up
    pub ip: String,

    /// ipdata.co API key
    pub api_key: String,

    /// Base URL of the ipdata.co API
    pub ipdata_base_url: String,

    /// Base URL of browserleaks.com
    pub browserleaks_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: String::new(),
            api_key: String::new(),
            ipdata_base_url: IPDATA_BASE_URL.to_string(),
            browserleaks_base_url: BROWSERLEAKS_BASE_URL.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Builds a configuration for `ip` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Usage` if a log level/format variable holds an
    /// unknown value. Missing values fall back to defaults; the API key is
    /// checked later by [`Config::validate`].
    pub fn from_env(ip: impl Into<String>) -> Result<Self, LookupError> {
        Self::from_env_with(ip, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_env_with<F>(ip: impl Into<String>, lookup: F) -> Result<Self, LookupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config {
            ip: ip.into(),
            api_key: lookup(ENV_API_KEY).unwrap_or_default(),
            ..Default::default()
        };

        if let Some(url) = non_empty(lookup(ENV_IPDATA_BASE_URL)) {
            config.ipdata_base_url = url;
        }
        if let Some(url) = non_empty(lookup(ENV_BROWSERLEAKS_BASE_URL)) {
            config.browserleaks_base_url = url;
        }
        if let Some(level) = non_empty(lookup(ENV_LOG_LEVEL)) {
            config.log_level = LogLevel::from_str(&level, true).map_err(|_| {
                LookupError::Usage(format!("{ENV_LOG_LEVEL} has unknown value '{level}'"))
            })?;
        }
        if let Some(format) = non_empty(lookup(ENV_LOG_FORMAT)) {
            config.log_format = LogFormat::from_str(&format, true).map_err(|_| {
                LookupError::Usage(format!("{ENV_LOG_FORMAT} has unknown value '{format}'"))
            })?;
        }

        Ok(config)
    }

    /// Validates the configuration before any network call is made.
    ///
    /// Checks run in the order the user would fix them: the address is given,
    /// the address is well formed, the API key is present, then the
    /// programmatic settings.
    ///
    /// # Errors
    ///
    /// - `LookupError::Usage` for a missing address, missing API key, zero
    ///   timeout or unparsable base URL
    /// - `LookupError::InvalidIp` for a malformed address
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.ip.is_empty() {
            return Err(LookupError::Usage(
                "Please provide an IP address using the --ip flag".to_string(),
            ));
        }
        if !is_valid_ip(&self.ip) {
            return Err(LookupError::InvalidIp(self.ip.clone()));
        }
        if self.api_key.is_empty() {
            return Err(LookupError::Usage(format!(
                "API key is missing. Set it via the {ENV_API_KEY} environment variable"
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(LookupError::Usage(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }
        for base in [&self.ipdata_base_url, &self.browserleaks_base_url] {
            if let Err(e) = url::Url::parse(base) {
                return Err(LookupError::Usage(format!("invalid base URL '{base}': {e}")));
            }
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn valid_config() -> Config {
        Config {
            ip: "8.8.8.8".to_string(),
            api_key: "test-key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.ipdata_base_url, "https://api.ipdata.co");
        assert_eq!(config.browserleaks_base_url, "https://browserleaks.com");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_from_env_reads_api_key_and_overrides() {
        let config = Config::from_env_with(
            "1.1.1.1",
            env_of(&[
                ("IPDATA_API_KEY", "abc"),
                ("IPDATA_BASE_URL", "http://127.0.0.1:9000"),
                ("BROWSERLEAKS_BASE_URL", "http://127.0.0.1:9001"),
                ("IP_CHECKER_LOG_LEVEL", "debug"),
                ("IP_CHECKER_LOG_FORMAT", "JSON"),
            ]),
        )
        .unwrap();

        assert_eq!(config.ip, "1.1.1.1");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.ipdata_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.browserleaks_base_url, "http://127.0.0.1:9001");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_from_env_empty_overrides_keep_defaults() {
        let config = Config::from_env_with(
            "1.1.1.1",
            env_of(&[("IPDATA_BASE_URL", ""), ("IP_CHECKER_LOG_LEVEL", "")]),
        )
        .unwrap();
        assert_eq!(config.ipdata_base_url, IPDATA_BASE_URL);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_from_env_rejects_unknown_log_format() {
        let err = Config::from_env_with("1.1.1.1", env_of(&[("IP_CHECKER_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, LookupError::Usage(_)));
        assert!(err.to_string().contains("IP_CHECKER_LOG_FORMAT"));
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_ip_is_usage_error() {
        let config = Config {
            ip: String::new(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LookupError::Usage(_)));
        assert!(err.to_string().contains("--ip"));
    }

    #[test]
    fn test_validate_malformed_ip() {
        let config = Config {
            ip: "256.1.1.1".to_string(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LookupError::InvalidIp(ref ip) if ip == "256.1.1.1"));
        assert_eq!(err.to_string(), "Invalid IP address: 256.1.1.1");
    }

    #[test]
    fn test_validate_missing_api_key() {
        let config = Config {
            api_key: String::new(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LookupError::Usage(_)));
        assert!(err.to_string().contains("IPDATA_API_KEY"));
    }

    #[test]
    fn test_validate_checks_ip_before_api_key() {
        // Both wrong: the address is reported first
        let config = Config {
            ip: "not-an-ip".to_string(),
            api_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            LookupError::InvalidIp(_)
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let config = Config {
            browserleaks_base_url: "not a url".to_string(),
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LookupError::Usage(_)));
        assert!(err.to_string().contains("not a url"));
    }
}
