//! Utility functions.
//!
//! This module provides:
//! - URL redaction and text sanitization for logging
//! - CSS selector parsing utilities

pub mod sanitize;
mod selector;

pub use selector::parse_selector_with_fallback;
