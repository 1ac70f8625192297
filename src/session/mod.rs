//! Interactive session driver.
//!
//! Runs the selection monitor on a single task: events arrive over an mpsc
//! channel, in-flight backend futures are polled from a `FuturesUnordered` on
//! the same task, and a `CancellationToken` ends the loop from outside. Each
//! event is handled to completion before the next completion is looked at.

mod events;

use std::fmt;

use anyhow::ensure;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::analysis::{AnalysisResult, Completion, RequestId};
use crate::catalog::FeatureCatalog;
use crate::config::Config;
use crate::display::DisplaySink;
use crate::error_handling::{AnalysisError, SessionMetric, SessionStats};
use crate::initialization::init_dispatcher;
use crate::monitor::{MonitorState, SelectionMonitor, SelectionOutcome};

pub use events::{parse_line, read_events, SessionEvent};

type InFlight = BoxFuture<'static, (RequestId, Result<AnalysisResult, AnalysisError>)>;

/// Summary of a finished session.
#[derive(Debug)]
pub struct SessionReport<S> {
    /// Event counters
    pub stats: SessionStats,
    /// Monitor state when the loop ended
    pub final_state: MonitorState,
    /// Requests still in flight when the loop ended
    pub abandoned_requests: usize,
    /// The display sink, handed back to the caller
    pub sink: S,
}

impl<S> fmt::Display for SessionReport<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session summary (final state: {})", self.final_state)?;
        let counts = self.stats.non_zero();
        if counts.is_empty() {
            writeln!(f, "  no activity")?;
        }
        for (metric, count) in counts {
            writeln!(f, "  {}: {}", metric, count)?;
        }
        if self.abandoned_requests > 0 {
            writeln!(f, "  Analyses abandoned: {}", self.abandoned_requests)?;
        }
        Ok(())
    }
}

/// Runs an interactive session until it is told to stop.
///
/// The loop ends on `SessionEvent::Quit`, on cancellation, or once the event
/// channel is closed and every in-flight analysis has completed.
///
/// # Arguments
///
/// * `config` - Session configuration (backend latencies)
/// * `catalog` - Feature catalog used for detection
/// * `sink` - Display surface
/// * `events` - Incoming session events
/// * `cancel` - Token that stops the loop immediately when cancelled
///
/// # Errors
///
/// Returns an error if the catalog has no patterns.
pub async fn run_session<S: DisplaySink>(
    config: &Config,
    catalog: FeatureCatalog,
    sink: S,
    mut events: mpsc::Receiver<SessionEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<SessionReport<S>> {
    ensure!(
        catalog.pattern_count() > 0,
        "Feature catalog has no patterns; nothing could ever be detected"
    );

    let mut monitor = SelectionMonitor::new(sink, catalog, init_dispatcher(config));
    let mut stats = SessionStats::new();
    let mut in_flight: FuturesUnordered<InFlight> = FuturesUnordered::new();
    let mut selection = String::new();
    let mut events_open = true;

    log::info!("Session started");

    loop {
        if !events_open && in_flight.is_empty() {
            log::info!("Input closed and no analyses in flight");
            break;
        }

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                log::info!("Session cancelled");
                break;
            }

            Some((id, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                match monitor.on_analysis_complete(id, outcome) {
                    Completion::Applied(Ok(_)) => stats.increment(SessionMetric::AnalysisRendered),
                    Completion::Applied(Err(AnalysisError::Backend { .. })) => {
                        stats.increment(SessionMetric::BackendFailure)
                    }
                    Completion::Applied(Err(_)) => {}
                    Completion::Superseded => stats.increment(SessionMetric::AnalysisSuperseded),
                }
            }

            event = events.recv(), if events_open => {
                let Some(event) = event else {
                    log::debug!("Event channel closed");
                    events_open = false;
                    continue;
                };
                log::debug!("Session event: {:?}", event);

                match event {
                    SessionEvent::Selection(text) => {
                        selection = text;
                        match monitor.on_selection_change(&selection) {
                            SelectionOutcome::Ignored => {
                                stats.increment(SessionMetric::SelectionIgnored)
                            }
                            SelectionOutcome::Displayed { .. } => {
                                stats.increment(SessionMetric::SelectionAnalyzed)
                            }
                        }
                    }
                    SessionEvent::ClearSelection => selection.clear(),
                    SessionEvent::Analyze(backend) => {
                        match monitor.request_analysis(&selection, backend) {
                            Ok(submission) => {
                                stats.increment(SessionMetric::AnalysisSubmitted);
                                in_flight.push(submission.resolve().boxed());
                            }
                            Err(_) => stats.increment(SessionMetric::AnalysisRejected),
                        }
                    }
                    SessionEvent::Close => {
                        monitor.close();
                        stats.increment(SessionMetric::SidebarClosed);
                    }
                    SessionEvent::Reopen => {
                        monitor.reopen();
                    }
                    SessionEvent::Quit => {
                        log::info!("Quit requested");
                        break;
                    }
                }
            }
        }
    }

    let abandoned_requests = in_flight.len();
    if abandoned_requests > 0 {
        log::info!("Abandoning {} in-flight analysis request(s)", abandoned_requests);
    }

    Ok(SessionReport {
        stats,
        final_state: monitor.monitor_state(),
        abandoned_requests,
        sink: monitor.into_sink(),
    })
}
