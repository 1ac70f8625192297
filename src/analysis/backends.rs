//! Explanation backends.
//!
//! Both built-in backends are table-driven: each owns an ordered list of
//! `(keyword, explanation)` pairs. The longest keyword contained in the
//! selection wins, ties go to the earlier entry, and a generic explanation is
//! used when nothing matches. Keyword matching is case-sensitive.

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use super::{AnalysisResult, Backend};
use crate::error_handling::AnalysisError;

/// Future returned by [`ExplanationBackend::explain`].
pub type ExplanationFuture = BoxFuture<'static, Result<AnalysisResult, AnalysisError>>;

/// An asynchronous explanation oracle.
///
/// `explain` must be a pure function of `text`: no state is shared between
/// calls, and two calls may be in flight at the same time.
pub trait ExplanationBackend: Send + Sync {
    /// Which backend slot this implementation fills.
    fn kind(&self) -> Backend;

    /// Produces an explanation of `text`, resolving after the backend's latency.
    fn explain(&self, text: &str) -> ExplanationFuture;
}

/// Keyword-table backend with a fixed simulated latency.
#[derive(Debug, Clone)]
pub struct KeywordBackend {
    kind: Backend,
    latency: Duration,
    table: Vec<(String, String)>,
    fallback: String,
}

impl KeywordBackend {
    /// Creates a backend from an ordered keyword table.
    pub fn new(
        kind: Backend,
        latency: Duration,
        table: Vec<(String, String)>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            latency,
            table,
            fallback: fallback.into(),
        }
    }

    /// The built-in fast backend: one short paragraph.
    pub fn fast(latency: Duration) -> Self {
        let table = FAST_EXPLANATIONS
            .iter()
            .map(|(keyword, text)| (keyword.to_string(), format!("<p>{}</p>", text)))
            .collect();
        Self::new(
            Backend::Fast,
            latency,
            table,
            format!("<p>{}</p>", FAST_FALLBACK),
        )
    }

    /// The built-in detailed backend: a structured multi-point analysis.
    pub fn detailed(latency: Duration) -> Self {
        let table = DETAILED_EXPLANATIONS
            .iter()
            .map(|entry| (entry.keyword.to_string(), entry.to_html()))
            .collect();
        Self::new(Backend::Detailed, latency, table, DETAILED_FALLBACK.to_html())
    }

    /// Picks the explanation for `text` without any latency.
    pub fn explanation_for(&self, text: &str) -> &str {
        select_explanation(text, &self.table).unwrap_or(&self.fallback)
    }
}

impl ExplanationBackend for KeywordBackend {
    fn kind(&self) -> Backend {
        self.kind
    }

    fn explain(&self, text: &str) -> ExplanationFuture {
        let result = AnalysisResult {
            backend: self.kind,
            explanation_html: self.explanation_for(text).to_string(),
        };
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok(result)
        }
        .boxed()
    }
}

/// Longest contained keyword wins; on equal length the earlier entry is kept.
fn select_explanation<'a>(text: &str, table: &'a [(String, String)]) -> Option<&'a str> {
    let mut best: Option<(usize, &'a str)> = None;
    for (keyword, explanation) in table {
        if !text.contains(keyword.as_str()) {
            continue;
        }
        if best.map_or(true, |(len, _)| keyword.len() > len) {
            best = Some((keyword.len(), explanation.as_str()));
        }
    }
    best.map(|(_, explanation)| explanation)
}

const FAST_FLEXBOX: &str = "This CSS uses Flexbox layout, which makes it easy to distribute space and align items in a container, even when their size is unknown or dynamic.";
const FAST_ASYNC: &str = "This code uses async/await syntax, which makes asynchronous code look and behave more like synchronous code, making it easier to read and debug.";
const FAST_DECLARATIONS: &str = "This code uses modern ES6 variable declarations. 'const' creates constants that can't be reassigned, while 'let' creates block-scoped variables.";

const FAST_EXPLANATIONS: &[(&str, &str)] = &[
    ("fetch", "This code uses the Fetch API to make HTTP requests. It's a modern, Promise-based way to fetch data from servers, much cleaner than the old XMLHttpRequest."),
    ("flexbox", FAST_FLEXBOX),
    ("flex", FAST_FLEXBOX),
    ("async", FAST_ASYNC),
    ("await", FAST_ASYNC),
    ("const", FAST_DECLARATIONS),
    ("let", FAST_DECLARATIONS),
    ("grid", "This CSS uses Grid layout, a powerful two-dimensional layout system that allows you to create complex layouts with rows and columns."),
    ("addEventListener", "This code uses event listeners to handle user interactions. Event listeners are the modern way to respond to user actions like clicks, key presses, or mouse movements."),
];

const FAST_FALLBACK: &str = "This appears to be modern web development code. It uses current best practices and should work well in all modern browsers.";

/// One row of the detailed backend's table.
struct DetailedExplanation {
    keyword: &'static str,
    explanation: &'static str,
    compatibility: &'static str,
    performance: &'static str,
    security: &'static str,
}

impl DetailedExplanation {
    fn to_html(&self) -> String {
        format!(
            "<ul>\
             <li><strong>Explanation:</strong> {}</li>\
             <li><strong>Browser Compatibility:</strong> {}</li>\
             <li><strong>Performance Impact:</strong> {}</li>\
             <li><strong>Security Best Practices:</strong> {}</li>\
             </ul>",
            self.explanation, self.compatibility, self.performance, self.security
        )
    }
}

const DETAILED_ASYNC: DetailedExplanation = DetailedExplanation {
    keyword: "async",
    explanation: "This code uses async functions and await expressions to sequence asynchronous work without nested callbacks. Each await suspends the function until the awaited Promise settles.",
    compatibility: "Widely supported in all modern browsers (94%+). Transpilation is required for Internet Explorer.",
    performance: "Low. Async functions compile to Promise chains; sequential awaits can serialize work that could run in parallel with Promise.all.",
    security: "Always handle rejections with try/catch around awaits. Unhandled rejections can hide failures and leave the UI in an inconsistent state.",
};

const DETAILED_EXPLANATIONS: &[DetailedExplanation] = &[
    DetailedExplanation {
        keyword: "fetch",
        explanation: "This code uses the Fetch API, a modern interface for making network requests. It is promise-based and offers a more powerful and flexible feature set than the older XMLHttpRequest.",
        compatibility: "Widely supported in all modern browsers (95%+). Polyfills are required for Internet Explorer.",
        performance: "Low. The API is efficiently implemented in browsers. Performance depends on the network speed and the size of the fetched resource.",
        security: "Always handle potential errors with .catch() or try/catch blocks. Be mindful of CORS policies on the server you are fetching from. Avoid exposing sensitive API keys on the client-side.",
    },
    DETAILED_ASYNC,
    DetailedExplanation {
        keyword: "await",
        ..DETAILED_ASYNC
    },
    DetailedExplanation {
        keyword: "IntersectionObserver",
        explanation: "This code uses the Intersection Observer API to be notified when an element enters or leaves the viewport, commonly for lazy loading and infinite scrolling.",
        compatibility: "Limited availability (85%). Older Safari releases need a polyfill.",
        performance: "Positive. Observers replace scroll listeners and layout reads, moving visibility checks off the main thread's hot path.",
        security: "No direct risks. Disconnect observers when elements are removed to avoid leaking references.",
    },
    DetailedExplanation {
        keyword: "ServiceWorker",
        explanation: "This code registers or talks to a Service Worker, a background script that can intercept network requests, cache responses, and enable offline use.",
        compatibility: "Limited availability (87%). Requires a secure context (HTTPS) and is unavailable in some private browsing modes.",
        performance: "Potentially high benefit from caching, but a misconfigured cache strategy can serve stale assets.",
        security: "Serve the worker script from your own origin over HTTPS, scope it narrowly, and version caches so compromised or outdated assets can be evicted.",
    },
    DetailedExplanation {
        keyword: "localStorage",
        explanation: "This code uses Web Storage to persist key/value strings in the browser across page loads.",
        compatibility: "Widely supported. Storage may be disabled or throw when quota is exceeded.",
        performance: "Synchronous API: large reads and writes block the main thread. Keep stored values small.",
        security: "Never store tokens or personal data in Web Storage; any script on the origin, including injected scripts, can read it.",
    },
    DetailedExplanation {
        keyword: "addEventListener",
        explanation: "This code attaches event listeners to respond to user interaction or lifecycle events without overwriting other handlers.",
        compatibility: "Universally supported in all browsers in use.",
        performance: "Low. Prefer event delegation for large lists and mark scroll or touch listeners as passive.",
        security: "Validate any data read from events before using it, and remove listeners that capture sensitive state when they are no longer needed.",
    },
    DetailedExplanation {
        keyword: "grid",
        explanation: "This CSS uses Grid layout, a two-dimensional system for placing items into rows and columns.",
        compatibility: "Widely supported (92%). Subgrid support is more recent.",
        performance: "Low. Grid layout is computed natively; deeply nested grids with auto sizing can increase layout cost.",
        security: "No security implications.",
    },
    DetailedExplanation {
        keyword: "flex",
        explanation: "This CSS uses Flexbox, a one-dimensional layout model for distributing space and aligning items along a row or column.",
        compatibility: "Widely supported (98%). Gap for flex containers requires recent browsers.",
        performance: "Low. Avoid animating flex-basis on large containers, which triggers layout on every frame.",
        security: "No security implications.",
    },
];

const DETAILED_FALLBACK: DetailedExplanation = DetailedExplanation {
    keyword: "",
    explanation: "This appears to be modern web development code that follows current web standards.",
    compatibility: "This code is compatible with 94%+ of browsers in use.",
    performance: "Low to moderate. It uses efficient modern APIs.",
    security: "No obvious security issues detected. Consider adding polyfills for legacy browser support.",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_select_explanation_longest_keyword_wins() {
        let t = table(&[("let", "short"), ("addEventListener", "long")]);
        assert_eq!(
            select_explanation("let el; el.addEventListener('x', f)", &t),
            Some("long")
        );
    }

    #[test]
    fn test_select_explanation_tie_goes_to_earlier_entry() {
        let t = table(&[("fetch", "first"), ("const", "second")]);
        assert_eq!(select_explanation("const r = fetch(u)", &t), Some("first"));
    }

    #[test]
    fn test_select_explanation_no_match() {
        let t = table(&[("fetch", "x")]);
        assert_eq!(select_explanation("xyzzy", &t), None);
        assert_eq!(select_explanation("", &t), None);
    }

    #[test]
    fn test_select_explanation_is_case_sensitive() {
        let t = table(&[("fetch", "x")]);
        assert_eq!(select_explanation("FETCH(url)", &t), None);
    }

    #[test]
    fn test_fast_backend_fallback() {
        let backend = KeywordBackend::fast(Duration::ZERO);
        assert!(backend.explanation_for("xyzzy").contains("modern web development code"));
    }

    #[test]
    fn test_fast_backend_prefers_flexbox_entry_for_flex() {
        let backend = KeywordBackend::fast(Duration::ZERO);
        assert!(backend
            .explanation_for(".row { display: flex; }")
            .contains("Flexbox layout"));
    }

    #[test]
    fn test_detailed_backend_is_structured() {
        let backend = KeywordBackend::detailed(Duration::ZERO);
        let html = backend.explanation_for("await fetch('/api')");
        assert!(html.contains("Fetch API"));
        for heading in [
            "Explanation:",
            "Browser Compatibility:",
            "Performance Impact:",
            "Security Best Practices:",
        ] {
            assert!(html.contains(heading), "missing {}", heading);
        }
    }

    #[test]
    fn test_detailed_backend_longest_keyword() {
        let backend = KeywordBackend::detailed(Duration::ZERO);
        let html = backend.explanation_for("new IntersectionObserver(cb); await x;");
        assert!(html.contains("Intersection Observer API"));
    }

    #[test]
    fn test_detailed_is_richer_than_fast() {
        let fast = KeywordBackend::fast(Duration::ZERO);
        let detailed = KeywordBackend::detailed(Duration::ZERO);
        let text = "const data = await fetch(url);";
        assert!(detailed.explanation_for(text).len() > fast.explanation_for(text).len());
    }

    #[tokio::test]
    async fn test_explain_resolves_with_kind() {
        let backend = KeywordBackend::detailed(Duration::ZERO);
        let result = backend.explain("fetch('/x')").await.expect("explain succeeds");
        assert_eq!(result.backend, Backend::Detailed);
        assert_eq!(result.explanation_html, backend.explanation_for("fetch('/x')"));
    }

    #[tokio::test]
    async fn test_explain_is_pure() {
        let backend = KeywordBackend::fast(Duration::ZERO);
        let a = backend.explain("grid-area: main").await;
        let b = backend.explain("grid-area: main").await;
        assert_eq!(a, b);
    }
}
