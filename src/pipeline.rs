//! The segmentation pipeline.
//!
//! A run is strictly forward:
//!
//! ```text
//! entries ─order─▶ sorted ─sessionize─▶ ticketed ─merge─▶ blocks ─render─▶ sections
//! ```
//!
//! Every stage is a pure single pass with at most one entry of lookback.
//! Nothing here performs I/O; loading and writing belong to the caller.

mod merge;
mod render;
mod sessionize;

use jiff::SignedDuration;

use crate::model::{Labels, LogEntry, RunStats, Transcript};

pub use merge::merge_blocks;
pub use render::{Rendered, render_sections, tickets};
pub use sessionize::sessionize;

/// Establish the processing order: by room, then by send time.
///
/// When every room id is all digits the rooms compare as integers, the way a
/// numeric room column sorts; otherwise they compare as plain strings, so
/// `"10"` precedes `"9"` in a mixed table. The sort is stable, so messages
/// sharing a timestamp keep their input order.
pub fn order(entries: &mut [LogEntry]) {
    if entries.iter().all(|e| e.room.numeric().is_some()) {
        entries.sort_by(|a, b| {
            a.room
                .numeric()
                .cmp(&b.room.numeric())
                .then_with(|| a.room.cmp(&b.room))
                .then(a.sent_at.cmp(&b.sent_at))
        });
    } else {
        entries.sort_by(|a, b| a.room.cmp(&b.room).then(a.sent_at.cmp(&b.sent_at)));
    }
}

/// Run the whole pipeline over loaded entries.
///
/// Entries may arrive in any order; they are sorted first.
pub fn run(mut entries: Vec<LogEntry>, gap: SignedDuration, labels: &Labels) -> Transcript {
    if entries.is_empty() {
        tracing::warn!("input contains no log entries; output will be empty");
        return Transcript::default();
    }

    order(&mut entries);
    let ticketed = sessionize(&entries, gap);
    let blocks = merge_blocks(&ticketed);
    let Rendered { sections, dropped } = render_sections(&blocks, labels);

    let stats = RunStats {
        entries: entries.len(),
        tickets: sections.len() + dropped,
        blocks: blocks.len(),
        sections: sections.len(),
        dropped_tickets: dropped,
    };
    tracing::info!(
        entries = stats.entries,
        tickets = stats.tickets,
        blocks = stats.blocks,
        sections = stats.sections,
        dropped = stats.dropped_tickets,
        "rendered transcript"
    );

    Transcript { sections, stats }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use jiff::{SignedDuration, Timestamp};

    use crate::model::{LogEntry, Role, RoomId};

    pub const FIFTEEN_MINUTES: SignedDuration = SignedDuration::from_mins(15);

    pub fn t0() -> Timestamp {
        "2024-05-01T10:00:00Z".parse().unwrap()
    }

    /// An entry `minutes` after [`t0`]. Rows are assigned by the caller.
    pub fn entry(row: usize, room: &str, sender: Role, minutes: i64, text: &str) -> LogEntry {
        LogEntry {
            row,
            room: RoomId::new(room),
            sender,
            sent_at: t0().checked_add(SignedDuration::from_mins(minutes)).unwrap(),
            text: text.into(),
        }
    }

    pub fn user(row: usize, room: &str, minutes: i64, text: &str) -> LogEntry {
        entry(row, room, Role::User, minutes, text)
    }

    pub fn agent(row: usize, room: &str, minutes: i64, text: &str) -> LogEntry {
        entry(row, room, Role::Agent, minutes, text)
    }
}
