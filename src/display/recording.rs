//! In-memory display sink that records every call.

use super::DisplaySink;

/// One call made against a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    CreateSidebar,
    Show,
    Hide,
    SetFeatureList(String),
    SetAnalysis(String),
}

/// Display sink that keeps the current slot contents and a call log.
///
/// Useful for embedding the monitor without any rendering surface, and for
/// asserting exactly what was rendered.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    present: bool,
    visible: bool,
    feature_list_html: String,
    analysis_html: String,
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn feature_list_html(&self) -> &str {
        &self.feature_list_html
    }

    pub fn analysis_html(&self) -> &str {
        &self.analysis_html
    }

    /// Every call received, in order.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Number of times the sidebar was actually created.
    pub fn creation_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == SinkCall::CreateSidebar)
            .count()
    }
}

impl DisplaySink for RecordingSink {
    fn create_sidebar_once(&mut self) {
        if self.present {
            return;
        }
        self.present = true;
        self.calls.push(SinkCall::CreateSidebar);
    }

    fn show(&mut self) {
        self.visible = true;
        self.calls.push(SinkCall::Show);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.calls.push(SinkCall::Hide);
    }

    fn set_feature_list_html(&mut self, markup: &str) {
        self.feature_list_html = markup.to_string();
        self.calls.push(SinkCall::SetFeatureList(markup.to_string()));
    }

    fn set_analysis_html(&mut self, markup: &str) {
        self.analysis_html = markup.to_string();
        self.calls.push(SinkCall::SetAnalysis(markup.to_string()));
    }

    fn is_sidebar_present(&self) -> bool {
        self.present
    }
}
