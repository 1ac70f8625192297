//! Session initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - Feature catalog (built-in or loaded from disk)
//! - Analysis dispatcher
//!
//! All initialization functions return proper error types for error handling.

mod logger;

use crate::analysis::AnalysisDispatcher;
use crate::catalog::{builtin_catalog, load_catalog, FeatureCatalog};
use crate::config::Config;
use crate::error_handling::CatalogError;

pub use logger::init_logger_with;

/// Initializes the feature catalog.
///
/// Loads the catalog file named by `config.catalog` if set, otherwise returns
/// a copy of the built-in catalog.
///
/// # Arguments
///
/// * `config` - Session configuration
///
/// # Errors
///
/// Returns a `CatalogError` if the configured file cannot be read or parsed.
pub async fn init_catalog(config: &Config) -> Result<FeatureCatalog, CatalogError> {
    match &config.catalog {
        Some(path) => load_catalog(path).await,
        None => {
            log::debug!("Using built-in feature catalog");
            Ok(builtin_catalog().clone())
        }
    }
}

/// Initializes the analysis dispatcher with the configured backend latencies.
pub fn init_dispatcher(config: &Config) -> AnalysisDispatcher {
    log::debug!(
        "Backend latencies: fast {:?}, detailed {:?}",
        config.fast_latency(),
        config.detailed_latency()
    );
    AnalysisDispatcher::from_config(config)
}
