//! Feature detection over a selected code fragment.
//!
//! Detection is substring-based: the input and every catalog pattern are
//! case-folded and tested for containment. There is no tokenization and no
//! comment stripping, so a pattern such as `grid` also matches inside an
//! unrelated identifier. That is accepted behavior.

use std::collections::HashSet;

use crate::catalog::{BaselineStatus, FeatureCatalog};

/// A feature found in a scan, enriched with its compatibility tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFeature {
    /// Canonical feature name
    pub feature_name: String,
    /// The first catalog pattern (in catalog order) that matched this feature
    pub matched_pattern: String,
    /// Availability classification
    pub status: BaselineStatus,
    /// Approximate browser support, if known
    pub support_percent: Option<String>,
}

/// Detects catalog features referenced by `code`.
///
/// Results follow catalog order, not input order, and contain at most one
/// entry per feature name. When several patterns map to the same feature,
/// the earliest matching pattern in catalog order is reported.
///
/// # Arguments
///
/// * `code` - The selected text
/// * `catalog` - Patterns and tiers to apply
///
/// # Returns
///
/// The detected features; empty if nothing matched.
pub fn detect(code: &str, catalog: &FeatureCatalog) -> Vec<DetectedFeature> {
    let folded = code.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut detected = Vec::new();

    for entry in catalog.entries() {
        let feature_name = entry.rule.feature_name.as_str();
        if seen.contains(feature_name) || !folded.contains(entry.folded.as_str()) {
            continue;
        }
        seen.insert(feature_name);

        let tier = catalog.lookup_tier(feature_name);
        log::debug!(
            "Feature detected: '{}' via pattern '{}' ({})",
            feature_name,
            entry.rule.pattern,
            tier.status
        );
        detected.push(DetectedFeature {
            feature_name: feature_name.to_string(),
            matched_pattern: entry.rule.pattern.clone(),
            status: tier.status,
            support_percent: tier.support_percent,
        });
    }

    detected
}

#[cfg(test)]
mod tests;
