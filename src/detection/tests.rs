//! Tests for feature detection: ordering, deduplication, and tier enrichment.

use std::collections::{HashMap, HashSet};

use super::*;
use crate::catalog::{builtin_catalog, FeaturePattern, TierEntry};

fn names(features: &[DetectedFeature]) -> Vec<&str> {
    features.iter().map(|f| f.feature_name.as_str()).collect()
}

#[test]
fn test_detect_arrow_fetch_example() {
    let features = detect("const x = () => fetch(url)", builtin_catalog());
    assert_eq!(
        names(&features),
        vec!["ES6 Const", "Arrow Functions", "JavaScript Fetch API"]
    );

    let fetch = &features[2];
    assert_eq!(fetch.status, BaselineStatus::WidelyAvailable);
    assert_eq!(fetch.support_percent.as_deref(), Some("95%"));
    assert_eq!(fetch.matched_pattern, "fetch");

    let arrow = &features[1];
    assert_eq!(arrow.support_percent.as_deref(), Some("96%"));

    // ES6 Const has no tier entry
    let konst = &features[0];
    assert_eq!(konst.status, BaselineStatus::Unknown);
    assert!(konst.support_percent.is_none());
}

#[test]
fn test_detect_unrecognized_snippet_is_empty() {
    assert!(detect("xyzzy", builtin_catalog()).is_empty());
    assert!(detect("", builtin_catalog()).is_empty());
}

#[test]
fn test_detect_is_case_insensitive() {
    let upper = detect("DISPLAY: GRID; FETCH()", builtin_catalog());
    let lower = detect("display: grid; fetch()", builtin_catalog());
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["JavaScript Fetch API", "CSS Grid"]);
}

#[test]
fn test_detect_mixed_case_pattern_matches_lowercase_input() {
    let features = detect("new intersectionobserver(cb)", builtin_catalog());
    assert_eq!(names(&features), vec!["Intersection Observer API"]);
    assert_eq!(features[0].matched_pattern, "IntersectionObserver");
    assert_eq!(features[0].status, BaselineStatus::LimitedAvailability);
}

#[test]
fn test_detect_dedupes_by_feature_first_pattern_wins() {
    // Both "async" and "await" map to Async/Await; "async" is earlier in the catalog
    let features = detect("await x; async function f() {}", builtin_catalog());
    let async_await: Vec<&DetectedFeature> = features
        .iter()
        .filter(|f| f.feature_name == "Async/Await")
        .collect();
    assert_eq!(async_await.len(), 1);
    assert_eq!(async_await[0].matched_pattern, "async");

    let storage = detect("sessionStorage.x = localStorage.y", builtin_catalog());
    assert_eq!(names(&storage), vec!["Web Storage API"]);
    assert_eq!(storage[0].matched_pattern, "localStorage");
}

#[test]
fn test_detect_substring_false_positive_is_kept() {
    // "grid" inside an unrelated identifier still counts
    let features = detect("let gridlockCounter = 0;", builtin_catalog());
    assert!(names(&features).contains(&"CSS Grid"));
}

#[test]
fn test_detect_follows_catalog_order_not_input_order() {
    let features = detect(
        "border-radius: 4px; display: flex; class Foo {}",
        builtin_catalog(),
    );
    assert_eq!(
        names(&features),
        vec!["ES6 Classes", "CSS Flexbox", "CSS Border Radius"]
    );
}

#[test]
fn test_detect_is_pure_and_has_no_duplicates() {
    let inputs = [
        "const a = async () => { await fetch('/x'); localStorage.setItem('k', 1); }",
        ".card { display: grid; transition: transform 1s; width: calc(100% - var(--gap)); }",
        "import { x } from 'y'; export class Z extends Promise {}",
        "   ",
    ];
    for input in inputs {
        let first = detect(input, builtin_catalog());
        let second = detect(input, builtin_catalog());
        assert_eq!(first, second, "detect must be deterministic for {:?}", input);

        let unique: HashSet<&str> = first.iter().map(|f| f.feature_name.as_str()).collect();
        assert_eq!(unique.len(), first.len(), "duplicates for {:?}", input);
    }
}

#[test]
fn test_detect_with_custom_catalog() {
    let mut tiers = HashMap::new();
    tiers.insert(
        "CSS Subgrid".to_string(),
        TierEntry {
            status: BaselineStatus::LimitedAvailability,
            support: Some("78%".to_string()),
        },
    );
    let catalog = FeatureCatalog::new(
        vec![
            FeaturePattern::new("subgrid", "CSS Subgrid"),
            FeaturePattern::new("grid", "CSS Grid"),
        ],
        tiers,
    )
    .expect("valid catalog");

    let features = detect("grid-template-columns: subgrid;", &catalog);
    assert_eq!(names(&features), vec!["CSS Subgrid", "CSS Grid"]);
    assert_eq!(features[0].support_percent.as_deref(), Some("78%"));
    // CSS Grid has no tier in this catalog
    assert_eq!(features[1].status, BaselineStatus::Unknown);
}
