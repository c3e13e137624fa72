//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, limits, environment variable names)
//! - HTTP header value constants
//! - The library `Config` and log option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
