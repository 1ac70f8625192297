//! Local file loading for feature catalogs.

use std::path::Path;
use tokio::fs;

use super::FeatureCatalog;
use crate::error_handling::CatalogError;

/// Loads a feature catalog from a local JSON file.
///
/// # Arguments
///
/// * `path` - Path to a JSON file in the [`CatalogFile`](super::CatalogFile) shape
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, `CatalogError::Parse`
/// if it is not valid catalog JSON, and `CatalogError::EmptyPattern` if a
/// pattern is empty.
pub async fn load_catalog(path: &Path) -> Result<FeatureCatalog, CatalogError> {
    let content = fs::read_to_string(path).await?;
    let catalog = FeatureCatalog::from_json_str(&content)?;
    if catalog.tier_count() == 0 {
        log::warn!(
            "Catalog {} has no tier table; every feature will report unknown availability",
            path.display()
        );
    }
    log::info!(
        "Loaded catalog from {}: {} patterns, {} tiers",
        path.display(),
        catalog.pattern_count(),
        catalog.tier_count()
    );
    Ok(catalog)
}
