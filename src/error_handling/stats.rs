//! Session statistics tracking.
//!
//! Counts what happened during an interactive session: selections seen and
//! ignored, analyses requested, rendered, superseded, and rejected.

use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

/// Kinds of events counted during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SessionMetric {
    /// Selection long enough to trigger detection
    SelectionAnalyzed,
    /// Selection at or below the length threshold
    SelectionIgnored,
    /// Analysis request accepted by the dispatcher
    AnalysisSubmitted,
    /// Analysis request rejected because the selection was empty
    AnalysisRejected,
    /// Completion rendered into the display sink
    AnalysisRendered,
    /// Completion dropped because a newer request superseded it
    AnalysisSuperseded,
    /// Completion that carried a backend failure
    BackendFailure,
    /// Sidebar close signal
    SidebarClosed,
}

impl SessionMetric {
    /// Returns a human-readable label for the metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMetric::SelectionAnalyzed => "Selections analyzed",
            SessionMetric::SelectionIgnored => "Selections ignored",
            SessionMetric::AnalysisSubmitted => "Analyses submitted",
            SessionMetric::AnalysisRejected => "Analyses rejected",
            SessionMetric::AnalysisRendered => "Analyses rendered",
            SessionMetric::AnalysisSuperseded => "Analyses superseded",
            SessionMetric::BackendFailure => "Backend failures",
            SessionMetric::SidebarClosed => "Sidebar closes",
        }
    }
}

impl std::fmt::Display for SessionMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session event counters.
///
/// Every metric is initialized to zero on creation. The session loop is
/// single-threaded, so plain counters behind `&mut self` are enough.
#[derive(Debug, Clone)]
pub struct SessionStats {
    counts: HashMap<SessionMetric, usize>,
}

impl SessionStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for metric in SessionMetric::iter() {
            counts.insert(metric, 0);
        }
        SessionStats { counts }
    }

    /// Increment a metric counter.
    pub fn increment(&mut self, metric: SessionMetric) {
        *self.counts.entry(metric).or_insert(0) += 1;
    }

    /// Get the count for a metric.
    pub fn get(&self, metric: SessionMetric) -> usize {
        self.counts.get(&metric).copied().unwrap_or(0)
    }

    /// Non-zero metrics in declaration order, for summaries.
    pub fn non_zero(&self) -> Vec<(SessionMetric, usize)> {
        SessionMetric::iter()
            .map(|metric| (metric, self.get(metric)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
