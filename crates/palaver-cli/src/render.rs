//! Console output formatting.
//!
//! Pure string building, kept free of I/O so the exact console format
//! stays unit-testable.

use palaver_store::{Message, UserId};

/// One message as a single console line.
pub fn format_message(message: &Message) -> String {
    format!(
        "[{}] {} -> {}: {}",
        message.timestamp.format("%Y-%m-%d %H:%M:%S"),
        message.sender,
        message.recipient,
        message.content
    )
}

/// A framed listing of messages under a title.
pub fn history_block(title: &str, messages: &[Message]) -> String {
    let lines: Vec<String> = messages.iter().map(format_message).collect();
    framed(title, lines, "(no messages)")
}

/// A framed listing of every known user id.
pub fn roster_block(ids: &[UserId]) -> String {
    let lines: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    framed("Available User IDs", lines, "(no users)")
}

/// Header, one line per entry (or the empty note), then a dashed footer
/// matching the header width.
fn framed(title: &str, lines: Vec<String>, empty_note: &str) -> String {
    let header = format!("--- {title} ---");
    let footer = "-".repeat(header.len());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    if lines.is_empty() {
        out.push_str(empty_note);
        out.push('\n');
    } else {
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push_str(&footer);
    out
}
