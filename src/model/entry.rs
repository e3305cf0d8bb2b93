//! Log entries: one chat message each, as read from the source table.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

/// Who sent a message.
///
/// Conversations are strictly two-party; any other sender is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The person asking.
    User,

    /// The person (or bot) answering.
    Agent,
}

impl Role {
    /// Parse the `sender` column. Only the exact values `user` and `agent` match.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "agent" => Some(Self::Agent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chat room identifier, kept verbatim from the source.
///
/// Orders lexicographically. Whole-table numeric ordering is decided by
/// [`crate::pipeline::order`], since it depends on every room in the log.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id's integer value, if it is made entirely of ASCII digits.
    pub fn numeric(&self) -> Option<u128> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// 1-based data row in the source, header excluded.
    pub row: usize,
    pub room: RoomId,
    pub sender: Role,
    pub sent_at: Timestamp,
    /// Opaque message body. Embedded newlines are kept verbatim.
    pub text: String,
}

/// A log entry tagged with the ticket it belongs to within its room.
///
/// Real tickets are numbered from 1. Ticket 0 collects messages that
/// arrive before any question has opened a ticket in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticketed<'a> {
    pub entry: &'a LogEntry,
    pub ticket: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_senders() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("agent"), Some(Role::Agent));
    }

    #[test]
    fn rejects_other_senders() {
        assert_eq!(Role::parse("bot"), None);
        assert_eq!(Role::parse("User"), None);
        assert_eq!(Role::parse(" user "), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn rooms_order_lexicographically() {
        let mut rooms = vec![RoomId::new("9"), RoomId::new("10"), RoomId::new("a")];
        rooms.sort();
        let names: Vec<&str> = rooms.iter().map(RoomId::as_str).collect();
        assert_eq!(names, ["10", "9", "a"]);
    }

    #[test]
    fn numeric_value_only_for_all_digit_ids() {
        assert_eq!(RoomId::new("042").numeric(), Some(42));
        assert_eq!(RoomId::new("R1").numeric(), None);
        assert_eq!(RoomId::new(" 1").numeric(), None);
        assert_eq!(RoomId::new("").numeric(), None);
    }
}
