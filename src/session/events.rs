//! Session events and the line-oriented command reader.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::analysis::Backend;

/// One input to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The highlighted text changed
    Selection(String),
    /// The user asked for an explanation of the current selection
    Analyze(Backend),
    /// Nothing is highlighted any more
    ClearSelection,
    /// The sidebar close control was used
    Close,
    /// Show the sidebar again with its previous contents
    Reopen,
    /// End the session
    Quit,
}

/// Parses one input line.
///
/// Lines starting with a known command (`:fast`, `:detailed`, `:clear`,
/// `:close`, `:show`, `:quit`) map to that command; any other non-blank line
/// is a new selection. Blank lines produce no event.
pub fn parse_line(line: &str) -> Option<SessionEvent> {
    let command = line.trim();
    if command.is_empty() {
        return None;
    }

    let event = match command {
        ":fast" => SessionEvent::Analyze(Backend::Fast),
        ":detailed" => SessionEvent::Analyze(Backend::Detailed),
        ":clear" => SessionEvent::ClearSelection,
        ":close" => SessionEvent::Close,
        ":show" => SessionEvent::Reopen,
        ":quit" => SessionEvent::Quit,
        _ => SessionEvent::Selection(line.trim_end_matches(['\r', '\n']).to_string()),
    };
    Some(event)
}

/// Reads lines from `reader` and forwards the parsed events to `events`.
///
/// Returns when the input ends, after forwarding `Quit`, or when the session
/// loop has gone away.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub async fn read_events<R>(reader: R, events: mpsc::Sender<SessionEvent>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read session input")?
    {
        let Some(event) = parse_line(&line) else {
            continue;
        };
        let quit = event == SessionEvent::Quit;
        if events.send(event).await.is_err() {
            log::debug!("Session loop stopped; no longer reading input");
            break;
        }
        if quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":fast"), Some(SessionEvent::Analyze(Backend::Fast)));
        assert_eq!(
            parse_line(" :detailed "),
            Some(SessionEvent::Analyze(Backend::Detailed))
        );
        assert_eq!(parse_line(":clear"), Some(SessionEvent::ClearSelection));
        assert_eq!(parse_line(":close"), Some(SessionEvent::Close));
        assert_eq!(parse_line(":show"), Some(SessionEvent::Reopen));
        assert_eq!(parse_line(":quit"), Some(SessionEvent::Quit));
    }

    #[test]
    fn test_parse_selection_keeps_text() {
        assert_eq!(
            parse_line("  const x = () => fetch(url)"),
            Some(SessionEvent::Selection("  const x = () => fetch(url)".to_string()))
        );
        // Unknown commands are just text
        assert_eq!(
            parse_line(":root { --gap: 1rem; }"),
            Some(SessionEvent::Selection(":root { --gap: 1rem; }".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[tokio::test]
    async fn test_read_events_stops_after_quit() {
        let input: &[u8] = b"display: grid; gap: 1rem;\n\n:fast\n:quit\nnever read\n";
        let (tx, mut rx) = mpsc::channel(8);
        read_events(input, tx).await.expect("read input");

        let mut received = Vec::new();
        while let Some(event) = rx.recv().await {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                SessionEvent::Selection("display: grid; gap: 1rem;".to_string()),
                SessionEvent::Analyze(Backend::Fast),
                SessionEvent::Quit,
            ]
        );
    }

    #[tokio::test]
    async fn test_read_events_stops_when_receiver_dropped() {
        let input: &[u8] = b"first selection here\nsecond selection here\n";
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        assert!(read_events(input, tx).await.is_ok());
    }
}
