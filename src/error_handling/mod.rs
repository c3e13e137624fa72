//! Error handling.
//!
//! This module provides:
//! - The `LookupError` taxonomy every fallible lookup step returns
//! - Initialization errors for logger and HTTP client setup
//! - Conversion of `reqwest` failures into lookup errors
//!
//! Every `LookupError` is fatal: the binary logs it and exits non-zero.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, LookupError};
