//! Tests for the interactive session driver fed from line-oriented input.

mod helpers;

use std::time::Duration;

use devlens::display::RecordingSink;
use devlens::session::read_events;
use devlens::{run_session, Config, FeatureCatalog, MonitorState, SessionMetric};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use helpers::instant_config;

async fn run_script(config: &Config, script: &'static [u8]) -> devlens::SessionReport<RecordingSink> {
    let (tx, rx) = mpsc::channel(16);
    let reader = tokio::spawn(read_events(script, tx));

    let report = run_session(
        config,
        FeatureCatalog::default(),
        RecordingSink::new(),
        rx,
        CancellationToken::new(),
    )
    .await
    .expect("session runs");

    reader
        .await
        .expect("reader task joins")
        .expect("reader succeeds");
    report
}

#[tokio::test]
async fn test_scripted_session_end_to_end() {
    let report = run_script(
        &instant_config(),
        b"const x = () => fetch(url)\n:fast\n",
    )
    .await;

    assert_eq!(report.stats.get(SessionMetric::SelectionAnalyzed), 1);
    assert_eq!(report.stats.get(SessionMetric::AnalysisRendered), 1);
    assert_eq!(report.final_state, MonitorState::Displaying);
    assert!(report
        .sink
        .feature_list_html()
        .contains("JavaScript Fetch API"));
    assert!(report.sink.analysis_html().contains("Quick Explanation"));
}

#[tokio::test]
async fn test_back_to_back_requests_render_only_the_last() {
    let report = run_script(
        &instant_config(),
        b"const data = await fetch(url)\n:fast\n:detailed\n",
    )
    .await;

    // Both requests may be queued before either completes; at most one renders
    assert_eq!(report.stats.get(SessionMetric::AnalysisSubmitted), 2);
    assert_eq!(
        report.stats.get(SessionMetric::AnalysisRendered)
            + report.stats.get(SessionMetric::AnalysisSuperseded),
        2
    );
    assert!(report.sink.analysis_html().contains("Detailed Analysis"));
}

#[tokio::test]
async fn test_clear_then_analyze_is_rejected() {
    let report = run_script(
        &instant_config(),
        b"display: grid; place-items: center;\n:clear\n:detailed\n:close\n",
    )
    .await;

    assert_eq!(report.stats.get(SessionMetric::AnalysisRejected), 1);
    assert_eq!(report.stats.get(SessionMetric::SidebarClosed), 1);
    assert_eq!(report.final_state, MonitorState::Idle);
    assert!(report
        .sink
        .analysis_html()
        .contains("Please highlight some code first."));
}

#[tokio::test]
async fn test_cancellation_abandons_slow_request() {
    let config = Config {
        fast_latency_ms: 60_000,
        ..instant_config()
    };
    let (tx, rx) = mpsc::channel(16);
    tx.send(devlens::SessionEvent::Selection(
        "element.addEventListener('click', handler)".to_string(),
    ))
    .await
    .expect("send");
    tx.send(devlens::SessionEvent::Analyze(devlens::Backend::Fast))
        .await
        .expect("send");

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let report = run_session(
        &config,
        FeatureCatalog::default(),
        RecordingSink::new(),
        rx,
        cancel,
    )
    .await
    .expect("session runs");

    assert_eq!(report.abandoned_requests, 1);
    assert_eq!(report.stats.get(SessionMetric::AnalysisRendered), 0);
    drop(tx);
}
