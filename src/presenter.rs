//! Rendering of detection results and analysis outputs.
//!
//! These functions turn data into markup and write it to a [`DisplaySink`].
//! They hold no state and never read the session state.

use crate::analysis::{AnalysisResult, Backend};
use crate::catalog::BaselineStatus;
use crate::config::NO_FEATURES_MESSAGE;
use crate::detection::DetectedFeature;
use crate::display::DisplaySink;
use crate::utils::escape_html;

const COLOR_WIDELY_AVAILABLE: &str = "#28a745";
const COLOR_LIMITED_AVAILABILITY: &str = "#ffc107";
const COLOR_UNKNOWN: &str = "#6c757d";
const COLOR_ERROR: &str = "#dc3545";

fn status_color(status: BaselineStatus) -> &'static str {
    match status {
        BaselineStatus::WidelyAvailable => COLOR_WIDELY_AVAILABLE,
        BaselineStatus::LimitedAvailability => COLOR_LIMITED_AVAILABILITY,
        BaselineStatus::Unknown => COLOR_UNKNOWN,
    }
}

/// Markup for one detected feature.
pub fn feature_block(feature: &DetectedFeature) -> String {
    let color = status_color(feature.status);
    let support = feature
        .support_percent
        .as_deref()
        .map(|percent| format!(" ({} browser support)", escape_html(percent)))
        .unwrap_or_default();

    format!(
        "<div class=\"feature-result\" data-status=\"{status}\" style=\"border-left: 3px solid {color};\">\
         <div class=\"feature-name\">{name}</div>\
         <div class=\"feature-status\">Status: <span style=\"color: {color};\">{label}</span>{support}</div>\
         </div>",
        status = feature.status,
        color = color,
        name = escape_html(&feature.feature_name),
        label = feature.status.label(),
        support = support,
    )
}

/// Markup for a full feature list. An empty list yields the fixed empty-state message.
pub fn feature_list_markup(features: &[DetectedFeature]) -> String {
    if features.is_empty() {
        return format!("<p>{}</p>", NO_FEATURES_MESSAGE);
    }
    features.iter().map(feature_block).collect()
}

/// Renders the detected features into the feature list slot.
pub fn render_feature_list<S: DisplaySink + ?Sized>(sink: &mut S, features: &[DetectedFeature]) {
    sink.set_feature_list_html(&feature_list_markup(features));
}

/// Renders a backend result into the analysis slot.
pub fn render_analysis<S: DisplaySink + ?Sized>(sink: &mut S, result: &AnalysisResult) {
    let markup = format!(
        "<div class=\"analysis-result\" data-backend=\"{backend}\"><h5>{heading}</h5>{body}</div>",
        backend = result.backend,
        heading = result.backend.heading(),
        body = result.explanation_html,
    );
    sink.set_analysis_html(&markup);
}

/// Renders an inline validation message into the analysis slot.
pub fn render_validation_error<S: DisplaySink + ?Sized>(sink: &mut S, message: &str) {
    let markup = format!(
        "<p class=\"validation-error\" style=\"color: {};\">{}</p>",
        COLOR_ERROR,
        escape_html(message)
    );
    sink.set_analysis_html(&markup);
}

/// Renders a backend failure into the analysis slot.
pub fn render_backend_error<S: DisplaySink + ?Sized>(sink: &mut S, backend: Backend, message: &str) {
    let markup = format!(
        "<div class=\"analysis-error\" data-backend=\"{backend}\"><h5>{heading}</h5>\
         <p style=\"color: {color};\">Analysis failed: {message}</p></div>",
        backend = backend,
        heading = backend.heading(),
        color = COLOR_ERROR,
        message = escape_html(message),
    );
    sink.set_analysis_html(&markup);
}

/// Renders the loading indicator for `backend` into the analysis slot.
pub fn render_loading<S: DisplaySink + ?Sized>(sink: &mut S, backend: Backend) {
    let markup = format!(
        "<p class=\"loading\" data-backend=\"{}\">{}</p>",
        backend,
        backend.loading_message()
    );
    sink.set_analysis_html(&markup);
}

/// Clears the analysis slot.
pub fn clear_analysis<S: DisplaySink + ?Sized>(sink: &mut S) {
    sink.set_analysis_html("");
}

/// Creates the sidebar unless it already exists.
pub fn create_sidebar_once<S: DisplaySink + ?Sized>(sink: &mut S) {
    if !sink.is_sidebar_present() {
        sink.create_sidebar_once();
    }
}

pub fn show_sidebar<S: DisplaySink + ?Sized>(sink: &mut S) {
    sink.show();
}

pub fn hide_sidebar<S: DisplaySink + ?Sized>(sink: &mut S) {
    sink.hide();
}
