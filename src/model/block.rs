//! Blocks: one conversational turn.

use super::{Role, RoomId, Ticketed};

/// A maximal run of consecutive messages from the same role within one ticket.
///
/// The text is every message in the run joined with `\n`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub room: RoomId,
    pub ticket: u32,
    pub role: Role,
    pub text: String,
    /// Number of messages merged into this block.
    pub messages: usize,
}

impl Block {
    /// Start a block from its first message.
    pub fn open(first: &Ticketed<'_>) -> Self {
        Self {
            room: first.entry.room.clone(),
            ticket: first.ticket,
            role: first.entry.sender,
            text: first.entry.text.clone(),
            messages: 1,
        }
    }

    /// Whether `next` extends this block rather than starting a new one.
    ///
    /// A change of room, ticket, or role each closes the block.
    pub fn continues(&self, next: &Ticketed<'_>) -> bool {
        self.role == next.entry.sender && self.ticket == next.ticket && self.room == next.entry.room
    }

    pub fn push(&mut self, text: &str) {
        self.text.push('\n');
        self.text.push_str(text);
        self.messages += 1;
    }

    /// Whether `other` belongs to the same `(room, ticket)` conversation.
    pub fn same_ticket(&self, other: &Self) -> bool {
        self.ticket == other.ticket && self.room == other.room
    }
}
