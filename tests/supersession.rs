//! Tests for last-submitted-wins request handling.
//!
//! Submission futures are driven by hand so that completion order is chosen
//! by the test rather than by wall-clock latency.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use devlens::analysis::{ExplanationBackend, ExplanationFuture, KeywordBackend};
use devlens::display::{RecordingSink, SinkCall};
use devlens::{
    AnalysisDispatcher, AnalysisError, AnalysisResult, Backend, Completion, FeatureCatalog,
    MonitorState, SelectionMonitor,
};
use futures::FutureExt;

use helpers::recording_monitor;

const SELECTION: &str = "const data = await fetch(url)";

fn analysis_calls(sink: &RecordingSink) -> usize {
    sink.calls()
        .iter()
        .filter(|call| matches!(call, SinkCall::SetAnalysis(_)))
        .count()
}

#[tokio::test]
async fn test_fast_then_detailed_renders_only_detailed() {
    let mut monitor = recording_monitor();
    monitor.on_selection_change(SELECTION);

    let fast = monitor
        .request_analysis(SELECTION, Backend::Fast)
        .expect("valid request");
    let detailed = monitor
        .request_analysis(SELECTION, Backend::Detailed)
        .expect("valid request");
    assert!(detailed.id > fast.id);

    // Resolve in the opposite order of submission, then the other way round
    let (detailed_id, detailed_outcome) = detailed.resolve().await;
    let (fast_id, fast_outcome) = fast.resolve().await;

    assert!(matches!(
        monitor.on_analysis_complete(detailed_id, detailed_outcome),
        Completion::Applied(Ok(_))
    ));
    let rendered = monitor.sink().analysis_html().to_string();
    assert!(rendered.contains("Detailed Analysis"));

    assert_eq!(
        monitor.on_analysis_complete(fast_id, fast_outcome),
        Completion::Superseded
    );
    assert_eq!(monitor.sink().analysis_html(), rendered);
}

#[tokio::test]
async fn test_stale_completion_arriving_first_is_dropped() {
    let mut monitor = recording_monitor();
    monitor.on_selection_change(SELECTION);

    let first = monitor
        .request_analysis(SELECTION, Backend::Detailed)
        .expect("valid request");
    let second = monitor
        .request_analysis(SELECTION, Backend::Fast)
        .expect("valid request");

    let calls_before = analysis_calls(monitor.sink());
    let (first_id, first_outcome) = first.resolve().await;
    assert_eq!(
        monitor.on_analysis_complete(first_id, first_outcome),
        Completion::Superseded
    );
    assert_eq!(analysis_calls(monitor.sink()), calls_before);
    assert_eq!(monitor.monitor_state(), MonitorState::Analyzing);

    let (second_id, second_outcome) = second.resolve().await;
    monitor.on_analysis_complete(second_id, second_outcome);
    assert!(monitor.sink().analysis_html().contains("Quick Explanation"));
    assert_eq!(monitor.monitor_state(), MonitorState::Displaying);
}

#[tokio::test]
async fn test_close_and_new_selection_drops_old_completion() {
    let mut monitor = recording_monitor();
    monitor.on_selection_change(SELECTION);
    let submission = monitor
        .request_analysis(SELECTION, Backend::Detailed)
        .expect("valid request");

    monitor.close();
    assert!(monitor.state().pending_request().is_some());

    monitor.on_selection_change(".hero { background: linear-gradient(red, blue); }");
    let (id, outcome) = submission.resolve().await;
    assert_eq!(monitor.on_analysis_complete(id, outcome), Completion::Superseded);
    assert_eq!(monitor.sink().analysis_html(), "");
}

#[tokio::test]
async fn test_completion_while_closed_is_still_applied() {
    let mut monitor = recording_monitor();
    monitor.on_selection_change(SELECTION);
    let submission = monitor
        .request_analysis(SELECTION, Backend::Fast)
        .expect("valid request");

    monitor.close();
    let (id, outcome) = submission.resolve().await;
    assert!(matches!(
        monitor.on_analysis_complete(id, outcome),
        Completion::Applied(Ok(_))
    ));
    assert_eq!(monitor.monitor_state(), MonitorState::Idle);

    monitor.reopen();
    assert!(monitor.sink().analysis_html().contains("Quick Explanation"));
}

struct UnavailableBackend;

impl ExplanationBackend for UnavailableBackend {
    fn kind(&self) -> Backend {
        Backend::Detailed
    }

    fn explain(&self, _text: &str) -> ExplanationFuture {
        async {
            Err::<AnalysisResult, _>(AnalysisError::Backend {
                backend: Backend::Detailed,
                message: "service unavailable".to_string(),
            })
        }
        .boxed()
    }
}

#[tokio::test]
async fn test_backend_failure_is_rendered_and_returns_to_displaying() {
    let dispatcher = AnalysisDispatcher::new(
        Arc::new(KeywordBackend::fast(Duration::ZERO)),
        Arc::new(UnavailableBackend),
    );
    let mut monitor =
        SelectionMonitor::new(RecordingSink::new(), FeatureCatalog::default(), dispatcher);
    monitor.on_selection_change(SELECTION);

    let submission = monitor
        .request_analysis(SELECTION, Backend::Detailed)
        .expect("valid request");
    let (id, outcome) = submission.resolve().await;

    assert!(matches!(
        monitor.on_analysis_complete(id, outcome),
        Completion::Applied(Err(AnalysisError::Backend { .. }))
    ));
    assert!(monitor
        .sink()
        .analysis_html()
        .contains("Analysis failed: service unavailable"));
    assert_eq!(monitor.monitor_state(), MonitorState::Displaying);
}
