//! Utility functions.
//!
//! This module provides:
//! - Text sanitization for logs
//! - HTML escaping for rendered markup

pub mod sanitize;

pub use sanitize::{escape_html, selection_preview};
