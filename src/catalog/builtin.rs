//! Built-in feature catalog.
//!
//! Pattern order is significant: it decides the order of detection results
//! and which pattern is reported when several patterns of one feature match.
//! Language syntax comes first, then JavaScript platform APIs, then CSS.

use std::sync::LazyLock;

use super::models::BaselineStatus;
use super::FeatureCatalog;

/// (pattern, feature name), in catalog order.
pub(crate) const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // Modern JavaScript syntax
    ("const", "ES6 Const"),
    ("let", "ES6 Let"),
    ("=>", "Arrow Functions"),
    ("class", "ES6 Classes"),
    ("import", "ES6 Modules"),
    ("export", "ES6 Modules"),
    // JavaScript APIs
    ("fetch", "JavaScript Fetch API"),
    ("Promise", "JavaScript Promises"),
    ("async", "Async/Await"),
    ("await", "Async/Await"),
    ("IntersectionObserver", "Intersection Observer API"),
    ("ServiceWorker", "Service Worker API"),
    ("localStorage", "Web Storage API"),
    ("sessionStorage", "Web Storage API"),
    ("querySelector", "DOM Selection API"),
    ("addEventListener", "Event Listeners"),
    // CSS properties
    ("flex", "CSS Flexbox"),
    ("grid", "CSS Grid"),
    ("transform", "CSS Transforms"),
    ("transition", "CSS Transitions"),
    ("animation", "CSS Animations"),
    ("border-radius", "CSS Border Radius"),
    ("box-shadow", "CSS Box Shadow"),
    ("linear-gradient", "CSS Gradients"),
    ("calc(", "CSS Calc Function"),
    ("var(", "CSS Custom Properties"),
];

/// (feature name, status, support percentage)
pub(crate) const BUILTIN_TIERS: &[(&str, BaselineStatus, &str)] = &[
    ("JavaScript Fetch API", BaselineStatus::WidelyAvailable, "95%"),
    ("JavaScript Promises", BaselineStatus::WidelyAvailable, "97%"),
    ("Async/Await", BaselineStatus::WidelyAvailable, "94%"),
    ("CSS Flexbox", BaselineStatus::WidelyAvailable, "98%"),
    ("CSS Grid", BaselineStatus::WidelyAvailable, "92%"),
    ("CSS Custom Properties", BaselineStatus::WidelyAvailable, "89%"),
    (
        "Intersection Observer API",
        BaselineStatus::LimitedAvailability,
        "85%",
    ),
    ("Service Worker API", BaselineStatus::LimitedAvailability, "87%"),
    ("Arrow Functions", BaselineStatus::WidelyAvailable, "96%"),
    ("ES6 Classes", BaselineStatus::WidelyAvailable, "95%"),
];

static BUILTIN_CATALOG: LazyLock<FeatureCatalog> = LazyLock::new(|| {
    let catalog = FeatureCatalog::from_static(BUILTIN_PATTERNS, BUILTIN_TIERS);
    log::debug!(
        "Built-in catalog ready: {} patterns, {} tiers",
        catalog.pattern_count(),
        catalog.tier_count()
    );
    catalog
});

/// Returns the process-wide built-in catalog.
pub fn builtin_catalog() -> &'static FeatureCatalog {
    &BUILTIN_CATALOG
}
