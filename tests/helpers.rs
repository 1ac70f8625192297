// Shared test helpers for monitor and session setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use devlens::display::RecordingSink;
use devlens::{AnalysisDispatcher, Config, FeatureCatalog, SelectionMonitor};

/// Config whose backends resolve without delay.
#[allow(dead_code)] // Used by other test files
pub fn instant_config() -> Config {
    Config {
        fast_latency_ms: 0,
        detailed_latency_ms: 0,
        ..Config::default()
    }
}

/// Monitor over the built-in catalog, a recording sink, and zero-latency backends.
#[allow(dead_code)] // Used by other test files
pub fn recording_monitor() -> SelectionMonitor<RecordingSink> {
    SelectionMonitor::new(
        RecordingSink::new(),
        FeatureCatalog::default(),
        AnalysisDispatcher::with_latencies(Duration::ZERO, Duration::ZERO),
    )
}

/// Feature names in rendered order.
#[allow(dead_code)] // Used by other test files
pub fn feature_names(monitor: &SelectionMonitor<RecordingSink>) -> Vec<String> {
    monitor
        .state()
        .last_features()
        .iter()
        .map(|feature| feature.feature_name.clone())
        .collect()
}
