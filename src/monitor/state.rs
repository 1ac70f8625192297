//! Per-session UI state and the monitor's derived state machine.

use strum_macros::Display;

use crate::analysis::PendingRequest;
use crate::detection::DetectedFeature;

/// UI state for one interactive session.
///
/// Owned by the [`SelectionMonitor`](super::SelectionMonitor). Only the monitor
/// and the [`AnalysisDispatcher`](crate::analysis::AnalysisDispatcher) mutate it.
#[derive(Debug, Clone, Default)]
pub struct SessionUiState {
    pub(crate) sidebar_visible: bool,
    pub(crate) last_features: Vec<DetectedFeature>,
    pub(crate) pending_request: Option<PendingRequest>,
}

impl SessionUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Features from the most recent accepted selection.
    pub fn last_features(&self) -> &[DetectedFeature] {
        &self.last_features
    }

    /// The request whose completion will be honored, if any.
    pub fn pending_request(&self) -> Option<&PendingRequest> {
        self.pending_request.as_ref()
    }

    /// Current state of the selection state machine.
    ///
    /// A hidden (or never created) sidebar is `Idle` regardless of what is
    /// pending.
    pub fn monitor_state(&self) -> MonitorState {
        if !self.sidebar_visible {
            MonitorState::Idle
        } else if self.pending_request.is_some() {
            MonitorState::Analyzing
        } else {
            MonitorState::Displaying
        }
    }
}

/// States of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MonitorState {
    /// No sidebar yet, or sidebar hidden
    Idle,
    /// Sidebar visible, features shown, no analysis pending
    Displaying,
    /// An analysis request is pending
    Analyzing,
}
