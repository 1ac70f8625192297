//! devlens library: web feature detection and code explanation for selected text
//!
//! Given a snippet of highlighted source code, devlens finds the web platform
//! features it mentions, reports each feature's browser compatibility tier, and
//! asks one of two explanation backends (fast or detailed) to describe the
//! snippet. Only the most recent explanation request is ever shown.
//!
//! # Example
//!
//! ```no_run
//! use devlens::display::RecordingSink;
//! use devlens::{AnalysisDispatcher, Backend, FeatureCatalog, SelectionMonitor};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut monitor = SelectionMonitor::new(
//!     RecordingSink::new(),
//!     FeatureCatalog::default(),
//!     AnalysisDispatcher::from_config(&devlens::Config::default()),
//! );
//!
//! let selection = "const x = () => fetch(url)";
//! monitor.on_selection_change(selection);
//!
//! if let Ok(submission) = monitor.request_analysis(selection, Backend::Fast) {
//!     let (id, outcome) = submission.resolve().await;
//!     monitor.on_analysis_complete(id, outcome);
//! }
//! println!("{}", monitor.sink().analysis_html());
//! # }
//! ```
//!
//! # Requirements
//!
//! Backend futures sleep with `tokio::time`, so they must be driven inside a
//! Tokio runtime. Everything else is synchronous.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod detection;
pub mod display;
pub mod error_handling;
pub mod initialization;
pub mod monitor;
pub mod presenter;
pub mod session;
mod utils;

// Re-export public API
pub use analysis::{
    AnalysisDispatcher, AnalysisRequest, AnalysisResult, Backend, Completion, RequestId,
    Submission,
};
pub use catalog::{builtin_catalog, BaselineStatus, CompatibilityTier, FeatureCatalog};
pub use config::{Config, LogFormat, LogLevel};
pub use detection::{detect, DetectedFeature};
pub use display::DisplaySink;
pub use error_handling::{AnalysisError, CatalogError, SessionMetric, SessionStats};
pub use monitor::{MonitorState, SelectionMonitor, SelectionOutcome, SelectionSource};
pub use session::{run_session, SessionEvent, SessionReport};
