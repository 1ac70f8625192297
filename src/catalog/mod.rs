//! Feature catalog: which substrings indicate which web features, and how
//! widely each feature is supported.
//!
//! A catalog is read-only once built. It is either the built-in table
//! ([`builtin_catalog`]) or loaded from a JSON file ([`load_catalog`]).

mod builtin;
mod local;
mod models;

use std::collections::HashMap;

use crate::error_handling::CatalogError;

pub use builtin::builtin_catalog;
pub use local::load_catalog;
pub use models::{BaselineStatus, CatalogFile, CompatibilityTier, FeaturePattern, TierEntry};

/// A pattern with its case-folded form computed once at load time.
#[derive(Debug, Clone)]
pub(crate) struct CatalogEntry {
    pub(crate) rule: FeaturePattern,
    pub(crate) folded: String,
}

/// Ordered pattern table plus tier lookup.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    entries: Vec<CatalogEntry>,
    tiers: HashMap<String, CompatibilityTier>,
}

impl FeatureCatalog {
    /// Builds a catalog from ordered patterns and a tier table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyPattern` if any pattern is empty, since an
    /// empty pattern would match every input.
    pub fn new(
        patterns: Vec<FeaturePattern>,
        tiers: HashMap<String, TierEntry>,
    ) -> Result<Self, CatalogError> {
        if let Some((index, rule)) = patterns
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern.is_empty())
        {
            return Err(CatalogError::EmptyPattern {
                index,
                feature: rule.feature_name.clone(),
            });
        }

        let entries = patterns
            .into_iter()
            .map(|rule| CatalogEntry {
                folded: rule.pattern.to_lowercase(),
                rule,
            })
            .collect();

        let tiers = tiers
            .into_iter()
            .map(|(feature_name, entry)| {
                let tier = CompatibilityTier {
                    feature_name: feature_name.clone(),
                    status: entry.status,
                    support_percent: entry.support,
                };
                (feature_name, tier)
            })
            .collect();

        Ok(Self { entries, tiers })
    }

    /// Parses a catalog from JSON text (see [`CatalogFile`] for the shape).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.patterns, file.tiers)
    }

    /// Builds a catalog from static tables. Static patterns are known non-empty.
    pub(crate) fn from_static(
        patterns: &[(&str, &str)],
        tiers: &[(&str, BaselineStatus, &str)],
    ) -> Self {
        let entries = patterns
            .iter()
            .map(|(pattern, feature)| CatalogEntry {
                rule: FeaturePattern::new(*pattern, *feature),
                folded: pattern.to_lowercase(),
            })
            .collect();
        let tiers = tiers
            .iter()
            .map(|(feature, status, support)| {
                (
                    feature.to_string(),
                    CompatibilityTier {
                        feature_name: feature.to_string(),
                        status: *status,
                        support_percent: Some(support.to_string()),
                    },
                )
            })
            .collect();
        Self { entries, tiers }
    }

    /// Looks up a feature's compatibility tier.
    ///
    /// Never fails: features absent from the tier table resolve to
    /// [`BaselineStatus::Unknown`] with no support percentage.
    pub fn lookup_tier(&self, feature_name: &str) -> CompatibilityTier {
        self.tiers
            .get(feature_name)
            .cloned()
            .unwrap_or_else(|| CompatibilityTier::unknown(feature_name))
    }

    /// Patterns in catalog order.
    pub fn patterns(&self) -> impl Iterator<Item = &FeaturePattern> {
        self.entries.iter().map(|entry| &entry.rule)
    }

    pub(crate) fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn pattern_count(&self) -> usize {
        self.entries.len()
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        builtin_catalog().clone()
    }
}
