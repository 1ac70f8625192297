//! Explanation requests and the single-flight dispatcher.
//!
//! Two interchangeable backends (fast and detailed) turn a selected snippet
//! into an HTML explanation after some latency. The dispatcher honors only the
//! most recently submitted request: older completions are dropped when they
//! arrive, although their work is not aborted.

mod backends;
mod dispatcher;

use strum_macros::{Display, EnumIter};

pub use backends::{ExplanationBackend, ExplanationFuture, KeywordBackend};
pub use dispatcher::{AnalysisDispatcher, Completion, Submission};

/// Which explanation backend a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Backend {
    /// Quick single-paragraph explanation
    Fast,
    /// Structured multi-point analysis
    Detailed,
}

impl Backend {
    /// Message shown in the analysis slot while this backend is working.
    pub fn loading_message(&self) -> &'static str {
        match self {
            Backend::Fast => "Analyzing your code...",
            Backend::Detailed => "Running detailed analysis...",
        }
    }

    /// Heading shown above this backend's result.
    pub fn heading(&self) -> &'static str {
        match self {
            Backend::Fast => "Quick Explanation",
            Backend::Detailed => "Detailed Analysis",
        }
    }
}

/// Identity of an accepted submission. Strictly increasing per dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty selection text
    pub selected_text: String,
    /// Backend chosen by the user
    pub backend: Backend,
}

/// The request currently honored by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub request: AnalysisRequest,
}

/// Output of a backend. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Backend that produced the explanation
    pub backend: Backend,
    /// Explanation markup
    pub explanation_html: String,
}
