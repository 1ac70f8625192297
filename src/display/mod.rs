//! Display sink abstraction.
//!
//! The sidebar is an opaque rendering surface with two content slots (feature
//! list and analysis) plus visibility control. Content is passed as markup;
//! sinks decide how to present it.

mod recording;
mod terminal;

pub use recording::{RecordingSink, SinkCall};
pub use terminal::TerminalSink;

/// A rendering surface for the sidebar.
pub trait DisplaySink {
    /// Creates the sidebar if it does not exist yet. Must be a no-op otherwise.
    fn create_sidebar_once(&mut self);

    /// Makes the sidebar visible.
    fn show(&mut self);

    /// Hides the sidebar without discarding its contents.
    fn hide(&mut self);

    /// Replaces the feature list slot.
    fn set_feature_list_html(&mut self, markup: &str);

    /// Replaces the analysis slot. An empty string clears it.
    fn set_analysis_html(&mut self, markup: &str);

    /// Whether the sidebar has been created.
    fn is_sidebar_present(&self) -> bool;
}
