//! Core data model for chatlog.
//!
//! These types follow a log through the pipeline:
//! entries as loaded, entries tagged with a ticket, merged blocks,
//! and the rendered sections with their run statistics.

mod block;
mod entry;
mod section;

pub use block::Block;
pub use entry::{LogEntry, Role, RoomId, Ticketed};
pub use section::{Labels, RunStats, Section, Transcript};
