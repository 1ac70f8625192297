//! Selection monitor.
//!
//! Reacts to selection changes and analysis requests, drives the detector and
//! the dispatcher, and renders through the presenter. The monitor owns the
//! session UI state; nothing else keeps a copy.
//!
//! State machine (derived from [`SessionUiState`]):
//!
//! - `Idle`: no sidebar yet, or sidebar hidden
//! - `Displaying`: sidebar visible with the latest features
//! - `Analyzing`: an analysis request is pending

mod state;

pub use state::{MonitorState, SessionUiState};

use crate::analysis::{AnalysisDispatcher, AnalysisResult, Backend, Completion, RequestId, Submission};
use crate::catalog::FeatureCatalog;
use crate::config::MIN_SELECTION_CHARS;
use crate::detection::detect;
use crate::display::DisplaySink;
use crate::error_handling::AnalysisError;
use crate::presenter;
use crate::utils::selection_preview;

/// Anything that can report the currently highlighted text.
pub trait SelectionSource {
    /// The current selection, untrimmed. Empty when nothing is selected.
    fn selected_text(&self) -> String;
}

impl SelectionSource for str {
    fn selected_text(&self) -> String {
        self.to_string()
    }
}

impl SelectionSource for String {
    fn selected_text(&self) -> String {
        self.clone()
    }
}

/// Result of handling a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Selection too short; nothing changed
    Ignored,
    /// Features were detected and rendered
    Displayed {
        /// Number of features rendered
        feature_count: usize,
    },
}

/// Wires selection events to detection, dispatch, and rendering.
pub struct SelectionMonitor<S: DisplaySink> {
    sink: S,
    catalog: FeatureCatalog,
    dispatcher: AnalysisDispatcher,
    state: SessionUiState,
}

impl<S: DisplaySink> SelectionMonitor<S> {
    /// Creates a monitor rendering into `sink`.
    ///
    /// # Arguments
    ///
    /// * `sink` - Display surface the sidebar lives on
    /// * `catalog` - Pattern and tier data used for detection
    /// * `dispatcher` - Routes analysis requests to the backends
    pub fn new(sink: S, catalog: FeatureCatalog, dispatcher: AnalysisDispatcher) -> Self {
        Self {
            sink,
            catalog,
            dispatcher,
            state: SessionUiState::new(),
        }
    }

    /// Handles a change of the highlighted text.
    ///
    /// Selections of `MIN_SELECTION_CHARS` characters or fewer (after
    /// trimming) are ignored without touching the state or the sink. Longer
    /// selections show the sidebar, render the detected features, clear any
    /// previous analysis output, and cancel the pending request.
    ///
    /// # Returns
    ///
    /// Whether the selection was ignored or how many features were shown.
    pub fn on_selection_change<T: SelectionSource + ?Sized>(
        &mut self,
        source: &T,
    ) -> SelectionOutcome {
        let text = source.selected_text();
        let trimmed = text.trim();
        if trimmed.chars().count() <= MIN_SELECTION_CHARS {
            log::debug!(
                "Ignoring short selection ({} chars)",
                trimmed.chars().count()
            );
            return SelectionOutcome::Ignored;
        }

        presenter::create_sidebar_once(&mut self.sink);
        presenter::show_sidebar(&mut self.sink);
        self.state.sidebar_visible = true;

        let features = detect(trimmed, &self.catalog);
        presenter::render_feature_list(&mut self.sink, &features);
        presenter::clear_analysis(&mut self.sink);
        self.dispatcher.cancel_pending(&mut self.state);

        log::info!(
            "Selection \"{}\": {} feature(s) detected",
            selection_preview(trimmed),
            features.len()
        );

        let feature_count = features.len();
        self.state.last_features = features;
        SelectionOutcome::Displayed { feature_count }
    }

    /// Requests an explanation of the current selection from `backend`.
    ///
    /// On success the sidebar is created or shown if needed, the loading
    /// indicator is rendered, and the returned
    /// [`Submission`] must be driven by the caller, its outcome fed back via
    /// [`on_analysis_complete`](Self::on_analysis_complete).
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptySelection` when the selection is empty or
    /// whitespace. The validation message is rendered and the state is left
    /// unchanged.
    pub fn request_analysis<T: SelectionSource + ?Sized>(
        &mut self,
        source: &T,
        backend: Backend,
    ) -> Result<Submission, AnalysisError> {
        let text = source.selected_text();
        match self.dispatcher.submit(&mut self.state, &text, backend) {
            Ok(submission) => {
                if !self.sink.is_sidebar_present() || !self.state.sidebar_visible {
                    presenter::create_sidebar_once(&mut self.sink);
                    presenter::show_sidebar(&mut self.sink);
                    self.state.sidebar_visible = true;
                }
                presenter::render_loading(&mut self.sink, backend);
                log::info!("Requested {} analysis {}", backend, submission.id);
                Ok(submission)
            }
            Err(e) => {
                presenter::render_validation_error(&mut self.sink, &e.to_string());
                log::debug!("Rejected {} analysis request: {}", backend, e);
                Err(e)
            }
        }
    }

    /// Feeds back the outcome of a submission.
    ///
    /// Only the pending request's outcome is rendered; anything else is
    /// dropped without touching the sink.
    pub fn on_analysis_complete(
        &mut self,
        id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        let completion = self.dispatcher.complete(&mut self.state, id, outcome);
        match &completion {
            Completion::Applied(Ok(result)) => {
                presenter::render_analysis(&mut self.sink, result);
                log::info!("Rendered {} analysis {}", result.backend, id);
            }
            Completion::Applied(Err(AnalysisError::Backend { backend, message })) => {
                presenter::render_backend_error(&mut self.sink, *backend, message);
                log::warn!("{} backend failed for request {}: {}", backend, id, message);
            }
            Completion::Applied(Err(e)) => {
                presenter::render_validation_error(&mut self.sink, &e.to_string());
            }
            Completion::Superseded => {
                log::debug!("Completion of request {} superseded", id);
            }
        }
        completion
    }

    /// Hides the sidebar. Features and any pending request are kept.
    pub fn close(&mut self) {
        presenter::hide_sidebar(&mut self.sink);
        self.state.sidebar_visible = false;
        log::info!("Sidebar closed");
    }

    /// Shows the sidebar again with its previous contents.
    ///
    /// Does nothing if no sidebar was ever created.
    pub fn reopen(&mut self) -> bool {
        if !self.sink.is_sidebar_present() {
            log::debug!("Reopen ignored: no sidebar yet");
            return false;
        }
        presenter::show_sidebar(&mut self.sink);
        self.state.sidebar_visible = true;
        log::info!("Sidebar reopened");
        true
    }

    pub fn state(&self) -> &SessionUiState {
        &self.state
    }

    pub fn monitor_state(&self) -> MonitorState {
        self.state.monitor_state()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// Consumes the monitor, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
