//! Single-flight analysis dispatcher.
//!
//! Every accepted submission gets a fresh [`RequestId`] and becomes the
//! pending request, replacing whatever was pending before. A completion is
//! applied only if its id still matches the pending one. Superseded work keeps
//! running; only its effect is suppressed.

use std::sync::Arc;
use std::time::Duration;

use super::backends::{ExplanationBackend, ExplanationFuture, KeywordBackend};
use super::{AnalysisRequest, AnalysisResult, Backend, PendingRequest, RequestId};
use crate::config::Config;
use crate::error_handling::AnalysisError;
use crate::monitor::SessionUiState;

/// An accepted request and the future that will produce its outcome.
///
/// The caller owns the future and decides how to drive it; feed its output
/// back through [`AnalysisDispatcher::complete`] with the same `id`.
pub struct Submission {
    pub id: RequestId,
    pub backend: Backend,
    pub future: ExplanationFuture,
}

impl Submission {
    /// Drives the backend future to completion, tagging the outcome with the id.
    pub async fn resolve(self) -> (RequestId, Result<AnalysisResult, AnalysisError>) {
        let outcome = self.future.await;
        (self.id, outcome)
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("id", &self.id)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// What happened to a completion handed to [`AnalysisDispatcher::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The completion belonged to the pending request; its outcome should be shown.
    Applied(Result<AnalysisResult, AnalysisError>),
    /// A newer request (or a fresh selection) superseded it; drop it.
    Superseded,
}

/// Routes explanation requests to the chosen backend, one honored at a time.
pub struct AnalysisDispatcher {
    fast: Arc<dyn ExplanationBackend>,
    detailed: Arc<dyn ExplanationBackend>,
    next_id: u64,
}

impl AnalysisDispatcher {
    /// Creates a dispatcher over two backends.
    ///
    /// Each backend must report the slot it is installed in.
    pub fn new(fast: Arc<dyn ExplanationBackend>, detailed: Arc<dyn ExplanationBackend>) -> Self {
        debug_assert_eq!(fast.kind(), Backend::Fast, "fast slot holds a {} backend", fast.kind());
        debug_assert_eq!(
            detailed.kind(),
            Backend::Detailed,
            "detailed slot holds a {} backend",
            detailed.kind()
        );
        Self {
            fast,
            detailed,
            next_id: 1,
        }
    }

    /// Creates a dispatcher over the built-in keyword backends.
    pub fn with_latencies(fast: Duration, detailed: Duration) -> Self {
        Self::new(
            Arc::new(KeywordBackend::fast(fast)),
            Arc::new(KeywordBackend::detailed(detailed)),
        )
    }

    /// Creates a dispatcher over the built-in backends with configured latencies.
    pub fn from_config(config: &Config) -> Self {
        Self::with_latencies(config.fast_latency(), config.detailed_latency())
    }

    fn backend(&self, backend: Backend) -> &dyn ExplanationBackend {
        match backend {
            Backend::Fast => self.fast.as_ref(),
            Backend::Detailed => self.detailed.as_ref(),
        }
    }

    /// Submits `text` for explanation by `backend`.
    ///
    /// On success the new request becomes the pending request, superseding
    /// any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptySelection` if `text` is empty or
    /// whitespace only. Nothing is dispatched and the pending request is left
    /// as it was.
    pub fn submit(
        &mut self,
        state: &mut SessionUiState,
        text: &str,
        backend: Backend,
    ) -> Result<Submission, AnalysisError> {
        let selected_text = text.trim();
        if selected_text.is_empty() {
            return Err(AnalysisError::EmptySelection);
        }

        let id = RequestId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = &state.pending_request {
            log::debug!(
                "Request {} ({}) supersedes pending request {} ({})",
                id,
                backend,
                previous.id,
                previous.request.backend
            );
        }

        let future = self.backend(backend).explain(selected_text);
        state.pending_request = Some(PendingRequest {
            id,
            request: AnalysisRequest {
                selected_text: selected_text.to_string(),
                backend,
            },
        });
        log::debug!("Dispatched request {} to {} backend", id, backend);

        Ok(Submission {
            id,
            backend,
            future,
        })
    }

    /// Applies a completion if it belongs to the pending request.
    ///
    /// A matching completion clears the pending slot and is returned as
    /// `Completion::Applied`. Anything else is `Completion::Superseded` and
    /// leaves the state untouched.
    pub fn complete(
        &self,
        state: &mut SessionUiState,
        id: RequestId,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        match &state.pending_request {
            Some(pending) if pending.id == id => {
                state.pending_request = None;
                Completion::Applied(outcome)
            }
            Some(pending) => {
                log::debug!(
                    "Dropping completion of request {}: request {} is pending",
                    id,
                    pending.id
                );
                Completion::Superseded
            }
            None => {
                log::debug!("Dropping completion of request {}: nothing pending", id);
                Completion::Superseded
            }
        }
    }

    /// Forgets the pending request so that its completion will be dropped.
    pub fn cancel_pending(&self, state: &mut SessionUiState) -> Option<PendingRequest> {
        let cancelled = state.pending_request.take();
        if let Some(pending) = &cancelled {
            log::debug!("Cancelled pending request {}", pending.id);
        }
        cancelled
    }
}
