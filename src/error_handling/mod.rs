//! Error handling and session statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, catalog loading, and analysis
//! - Session statistics tracking (selections, analyses, supersessions)

mod stats;
mod types;

// Re-export public API
pub use stats::{SessionMetric, SessionStats};
pub use types::{AnalysisError, CatalogError, InitializationError};
