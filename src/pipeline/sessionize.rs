//! Sessionizer: split each room's messages into tickets.

use std::collections::HashMap;

use jiff::SignedDuration;

use crate::model::{LogEntry, Role, RoomId, Ticketed};

/// Tag each entry with its ticket within its room.
///
/// `entries` must already be in processing order (see [`super::order`]).
///
/// A user message opens a new ticket when it is the first entry overall,
/// when the previous entry is from another room, or when more than `gap`
/// has passed since the previous entry. A gap of exactly `gap` does not
/// open one. Agent messages never open a ticket; they join whatever ticket
/// is open in their room, or ticket 0 if none has been opened yet.
pub fn sessionize(entries: &[LogEntry], gap: SignedDuration) -> Vec<Ticketed<'_>> {
    let mut scan = Scan::new(gap);
    entries
        .iter()
        .map(|entry| Ticketed {
            entry,
            ticket: scan.assign(entry),
        })
        .collect()
}

/// Fold state: per-room counters and the previous entry in global order.
struct Scan<'a> {
    gap: SignedDuration,
    counters: HashMap<&'a RoomId, u32>,
    previous: Option<&'a LogEntry>,
}

impl<'a> Scan<'a> {
    fn new(gap: SignedDuration) -> Self {
        Self {
            gap,
            counters: HashMap::new(),
            previous: None,
        }
    }

    fn assign(&mut self, entry: &'a LogEntry) -> u32 {
        let opens = entry.sender == Role::User && self.opens_ticket(entry);
        let counter = self.counters.entry(&entry.room).or_insert(0);
        if opens {
            *counter += 1;
            tracing::debug!(room = %entry.room, ticket = *counter, row = entry.row, "opened ticket");
        } else if *counter == 0 {
            tracing::debug!(room = %entry.room, row = entry.row, "message before any ticket opened");
        }
        self.previous = Some(entry);
        *counter
    }

    fn opens_ticket(&self, entry: &LogEntry) -> bool {
        match self.previous {
            None => true,
            Some(previous) => {
                previous.room != entry.room
                    || entry.sent_at.duration_since(previous.sent_at) > self.gap
            }
        }
    }
}
