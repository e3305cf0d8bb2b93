//! Loading chat logs from CSV.
//!
//! The source table has a header row with these columns (any order,
//! extra columns ignored):
//!
//! ```text
//! sendTime,userId,roomId,sender,text
//! ```
//!
//! `userId` must be present but is not used. Loading is all-or-nothing:
//! the first malformed row aborts with an error naming it.

use std::fs;
use std::io;
use std::path::Path;

use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, civil};
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::model::{LogEntry, Role, RoomId};

/// Errors that can occur while loading a chat log.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A row parsed as CSV but one of its values is unusable.
    #[error("malformed input at row {row}: {problem}")]
    MalformedInput { row: usize, problem: Problem },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What was wrong with a malformed row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("unparseable sendTime {0:?}")]
    Timestamp(String),

    #[error("unrecognized sender {0:?} (expected \"user\" or \"agent\")")]
    Sender(String),
}

pub type Result<T> = core::result::Result<T, SourceError>;

/// Slash-separated layouts seen in chat exports, tried after ISO 8601.
const SLASHED_FORMATS: &[&str] = &["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];

#[derive(Deserialize)]
struct Record {
    #[serde(rename = "sendTime")]
    send_time: String,
    #[serde(rename = "userId")]
    _user_id: IgnoredAny,
    #[serde(rename = "roomId")]
    room_id: String,
    sender: String,
    text: String,
}

impl Record {
    fn into_entry(self, row: usize) -> Result<LogEntry> {
        let sent_at = parse_timestamp(&self.send_time).ok_or_else(|| SourceError::MalformedInput {
            row,
            problem: Problem::Timestamp(self.send_time.clone()),
        })?;
        let sender = Role::parse(&self.sender).ok_or_else(|| SourceError::MalformedInput {
            row,
            problem: Problem::Sender(self.sender.clone()),
        })?;

        Ok(LogEntry {
            row,
            room: RoomId::new(self.room_id),
            sender,
            sent_at,
            text: self.text,
        })
    }
}

/// Load every entry from a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<LogEntry>> {
    let file = fs::File::open(path)?;
    read_csv(io::BufReader::new(file))
}

/// Read every entry from CSV data, in input order.
///
/// Rows are numbered from 1, not counting the header.
pub fn read_csv(reader: impl io::Read) -> Result<Vec<LogEntry>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for (index, record) in reader.deserialize::<Record>().enumerate() {
        entries.push(record?.into_entry(index + 1)?);
    }
    tracing::debug!(entries = entries.len(), "loaded chat log");
    Ok(entries)
}

/// Parse a send time.
///
/// Instants with an offset (`2024-05-01T10:00:00+09:00`) are taken as-is.
/// Civil date-times without one (`2024-05-01 10:00:00`, `2024/05/01 10:00`)
/// are read as UTC, which keeps gaps between them exact.
fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    let datetime = value.parse::<civil::DateTime>().ok().or_else(|| {
        SLASHED_FORMATS
            .iter()
            .find_map(|format| strtime::parse(format, value).ok()?.to_datetime().ok())
    })?;
    datetime
        .to_zoned(TimeZone::UTC)
        .ok()
        .map(|zoned| zoned.timestamp())
}
