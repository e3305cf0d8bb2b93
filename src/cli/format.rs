//! Output formatting for CLI display.

use std::path::Path;

use crate::model::{Block, RunStats};

/// One-line summary of a run, printed to stderr.
pub(super) fn format_summary(stats: &RunStats, destination: Option<&Path>) -> String {
    let sections = plural(stats.sections, "section", "sections");
    let dropped = plural(stats.dropped_tickets, "ticket", "tickets");
    let entries = plural(stats.entries, "message", "messages");
    let target = match destination {
        Some(path) => format!(" → {}", path.display()),
        None => String::new(),
    };
    format!("Formatted {sections} from {entries} ({dropped} dropped){target}")
}

/// One line per ticket: where it lives, its role sequence, and whether it renders.
pub(super) fn format_ticket(blocks: &[Block]) -> String {
    let Some(first) = blocks.first() else {
        return String::new();
    };

    let roles = blocks
        .iter()
        .map(|b| {
            if b.messages > 1 {
                format!("{}×{}", b.role, b.messages)
            } else {
                b.role.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" → ");
    let marker = if blocks.len() < 2 { "  [dropped]" } else { "" };

    format!(
        "room {}  ticket {}  {}  {roles}{marker}",
        first.room,
        first.ticket,
        plural(blocks.len(), "block", "blocks"),
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
