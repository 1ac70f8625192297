//! Data structures for the feature catalog.
//!
//! This module contains the core data structures used for feature detection:
//! - `FeaturePattern`: A substring pattern and the feature it indicates
//! - `BaselineStatus`: Cross-browser availability tier
//! - `CompatibilityTier`: A feature's tier plus its approximate support percentage
//! - `CatalogFile`: On-disk JSON shape of a catalog

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{AsRefStr, Display, EnumString};

/// A single detection rule: if `pattern` occurs in the input (case-insensitive),
/// the input references `feature_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePattern {
    /// Substring to look for
    pub pattern: String,
    /// Canonical feature name (several patterns may share one)
    #[serde(rename = "feature")]
    pub feature_name: String,
}

impl FeaturePattern {
    pub fn new(pattern: impl Into<String>, feature_name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            feature_name: feature_name.into(),
        }
    }
}

/// Cross-browser availability classification of a feature.
///
/// Serialized in kebab-case (`widely-available`, `limited-availability`,
/// `unknown`), matching the Baseline vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BaselineStatus {
    /// Supported across all major browsers
    WidelyAvailable,
    /// Missing or partial in at least one major browser
    LimitedAvailability,
    /// Not present in the tier table
    Unknown,
}

impl BaselineStatus {
    /// Display label: hyphens replaced by spaces, upper-cased.
    ///
    /// `widely-available` becomes `WIDELY AVAILABLE`.
    pub fn label(&self) -> String {
        self.as_ref().replace('-', " ").to_uppercase()
    }
}

/// Compatibility tier of one feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityTier {
    /// Feature this tier describes
    pub feature_name: String,
    /// Availability classification
    pub status: BaselineStatus,
    /// Approximate browser support, e.g. "95%"; `None` when unknown
    pub support_percent: Option<String>,
}

impl CompatibilityTier {
    /// The tier assigned to features missing from the tier table.
    pub fn unknown(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            status: BaselineStatus::Unknown,
            support_percent: None,
        }
    }
}

/// Tier entry as stored in a catalog file (the feature name is the map key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierEntry {
    /// Availability classification
    pub status: BaselineStatus,
    /// Approximate browser support, e.g. "95%"
    #[serde(default)]
    pub support: Option<String>,
}

/// On-disk JSON shape of a catalog.
///
/// Patterns are an array so that their order, which decides output order and
/// first-match precedence, survives a round trip through JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Ordered detection rules
    #[serde(default)]
    pub patterns: Vec<FeaturePattern>,
    /// Tier table: feature name -> tier
    #[serde(default)]
    pub tiers: HashMap<String, TierEntry>,
}
