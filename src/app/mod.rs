//! Main application modules.
//!
//! This module provides input validation used before any network call is made.

pub mod ip;

// Re-export public API
pub use ip::is_valid_ip;
