//! Error type definitions.
//!
//! This module defines the error types used throughout the crate.

use log::SetLoggerError;
use thiserror::Error;

use crate::analysis::Backend;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for analysis requests.
///
/// `EmptySelection` is a validation failure raised before anything is
/// dispatched. `Backend` is the failure outcome of a dispatched request; the
/// built-in backends never produce it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The selection submitted for analysis was empty or whitespace only.
    #[error("Please highlight some code first.")]
    EmptySelection,

    /// An explanation backend failed to produce a result.
    #[error("{backend} backend failed: {message}")]
    Backend {
        /// Backend that failed
        backend: Backend,
        /// Failure description
        message: String,
    },
}

/// Error types for feature catalog loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid catalog JSON.
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A pattern entry is empty and would match every input.
    #[error("Catalog pattern #{index} for feature '{feature}' is empty")]
    EmptyPattern {
        /// Zero-based position of the pattern in the catalog
        index: usize,
        /// Feature the empty pattern maps to
        feature: String,
    },
}
