//! Rendered output: sections, their labels, and run statistics.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// Line prefixes for rendered sections.
///
/// `question` and `exchange` are followed by a number; `answer` is not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Labels {
    pub question: String,
    pub answer: String,
    pub exchange: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            question: "question".into(),
            answer: "answer".into(),
            exchange: "exchange".into(),
        }
    }

    pub fn japanese() -> Self {
        Self {
            question: "質問".into(),
            answer: "回答".into(),
            exchange: "やりとり".into(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

/// The rendered text for one ticket that had at least a question and an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Global 1-based question number, in emission order.
    pub number: u32,
    pub room: RoomId,
    pub ticket: u32,
    #[serde(skip)]
    pub text: String,
}

/// Counts collected over one run, useful for checking what was dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub entries: usize,
    pub tickets: usize,
    pub blocks: usize,
    pub sections: usize,
    /// Tickets with fewer than two blocks.
    pub dropped_tickets: usize,
}

/// The result of a full run.
///
/// Serializes as a report: statistics plus where each section came from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    pub sections: Vec<Section>,
    pub stats: RunStats,
}

impl Transcript {
    /// All sections separated by a blank line, with no trailing newline.
    pub fn to_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
