//! Terminal display sink.
//!
//! Prints slot updates as plain text. Markup is parsed with `scraper` and
//! flattened to one line per block element; feature blocks are colored by
//! their `data-status` attribute.

use std::io::Write;
use std::sync::LazyLock;

use colored::*;
use scraper::{ElementRef, Html, Selector};

use super::DisplaySink;

// Block elements printed as one line each, in document order
const LINE_SELECTOR_STR: &str = "h4, h5, p, li, div[data-status]";

static LINE_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| {
    Selector::parse(LINE_SELECTOR_STR)
        .map_err(|e| {
            log::error!(
                "Failed to parse line selector '{}': {}",
                LINE_SELECTOR_STR,
                e
            );
        })
        .ok()
});

/// Display sink writing to a terminal (or any writer).
pub struct TerminalSink<W: Write> {
    out: W,
    present: bool,
    visible: bool,
}

impl TerminalSink<std::io::Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            present: false,
            visible: false,
        }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, slot: &str, lines: &[String]) {
        if !self.visible {
            log::debug!("{} updated while sidebar hidden", slot);
        }
        if let Err(e) = self.try_write_lines(slot, lines) {
            log::warn!("Failed to write {} to terminal: {}", slot, e);
        }
    }

    fn try_write_lines(&mut self, slot: &str, lines: &[String]) -> std::io::Result<()> {
        writeln!(self.out, "{}", format!("── {} ──", slot).bold())?;
        for line in lines {
            writeln!(self.out, "  {}", line)?;
        }
        self.out.flush()
    }

    fn write_status(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message.dimmed()) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Collapses runs of whitespace inside an element's text.
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flattens markup into printable lines.
pub(crate) fn markup_to_lines(markup: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(markup);

    let Some(selector) = LINE_SELECTOR.as_ref() else {
        let text = element_text(&fragment.root_element());
        return if text.is_empty() { Vec::new() } else { vec![text] };
    };

    fragment
        .select(selector)
        .filter_map(|element| {
            let text = element_text(&element);
            if text.is_empty() {
                return None;
            }
            let line = match element.value().attr("data-status") {
                Some("widely-available") => text.green().to_string(),
                Some("limited-availability") => text.yellow().to_string(),
                Some(_) => text.dimmed().to_string(),
                None => text,
            };
            Some(line)
        })
        .collect()
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn create_sidebar_once(&mut self) {
        if self.present {
            return;
        }
        self.present = true;
        self.write_status("DevLens sidebar ready. Highlight code to analyze it.");
    }

    fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.write_status("[sidebar shown]");
        }
    }

    fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.write_status("[sidebar hidden]");
        }
    }

    fn set_feature_list_html(&mut self, markup: &str) {
        let lines = markup_to_lines(markup);
        self.write_lines("Baseline Compatibility", &lines);
    }

    fn set_analysis_html(&mut self, markup: &str) {
        // Clearing the slot prints nothing
        if markup.is_empty() {
            return;
        }
        let lines = markup_to_lines(markup);
        self.write_lines("Analysis", &lines);
    }

    fn is_sidebar_present(&self) -> bool {
        self.present
    }
}
