//! Utilities for sanitizing user text.
//!
//! Selected text is arbitrary page content. Before it reaches logs it has
//! control characters removed and is truncated; before anything is
//! interpolated into markup it is HTML-escaped.

use crate::config::MAX_SELECTION_LOG_CHARS;

/// Removes control characters except newline, tab, and carriage return.
///
/// # Arguments
///
/// * `text` - The text to sanitize
///
/// # Returns
///
/// A sanitized copy of the text.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Sanitized, single-line preview of a selection for log output.
///
/// Newlines are folded to spaces and the preview is cut at
/// `MAX_SELECTION_LOG_CHARS` characters (not bytes) with a trailing `...`.
pub fn selection_preview(text: &str) -> String {
    let single_line: String = sanitize_text(text)
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    if single_line.chars().count() > MAX_SELECTION_LOG_CHARS {
        let truncated: String = single_line.chars().take(MAX_SELECTION_LOG_CHARS).collect();
        format!("{}...", truncated)
    } else {
        single_line
    }
}

/// Escapes text for interpolation into HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
