//! CLI interface for chatlog.
//!
//! Each subcommand is non-interactive: a CSV chat log in, text out.
//!
//! - `chatlog format <input>` renders the question/answer document.
//! - `chatlog tickets <input>` lists how the log was segmented, for debugging.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::SignedDuration;

use crate::config::Config;
use crate::model::{Labels, LogEntry};
use crate::{pipeline, source};

use format::{format_summary, format_ticket};

/// Output path used when neither `--out` nor `--stdout` is given.
const DEFAULT_OUTPUT: &str = "formatted_output.md";

/// chatlog: turn chat logs into question/answer documents.
#[derive(Debug, Parser)]
#[command(name = "chatlog", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Input columns: sendTime,userId,roomId,sender,text
  sender is "user" or "agent"; userId is required but unused.

Examples:
  chatlog format LINE_logs.csv
  chatlog format LINE_logs.csv --gap 30m --labels ja --out faq.md
  chatlog format LINE_logs.csv --stdout --report
  chatlog tickets LINE_logs.csv --gap 10m

The gap defaults to CHATLOG_GAP, then `gap` in ~/.chatlog/config.toml, then 15m."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a chat log as numbered question/answer sections.
    ///
    /// The output is written only once the whole log has been processed;
    /// a malformed row leaves any existing output untouched.
    Format {
        /// CSV chat log to read.
        input: PathBuf,

        /// Write the document to this file.
        #[arg(long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,

        /// Section label preset. Defaults to the config file's labels, else English.
        #[arg(long, value_enum)]
        labels: Option<LabelsArg>,

        /// Print run statistics and per-section origins as JSON to stderr.
        #[arg(long)]
        report: bool,

        #[command(flatten)]
        segmentation: SegmentationArgs,
    },

    /// List every ticket with its block sequence.
    ///
    /// Tickets with fewer than two blocks are marked as dropped.
    Tickets {
        /// CSV chat log to read.
        input: PathBuf,

        #[command(flatten)]
        segmentation: SegmentationArgs,
    },
}

#[derive(Debug, Args)]
pub struct SegmentationArgs {
    /// Idle time after which a question opens a new ticket (e.g. `15m`, `1h`, `PT90S`).
    #[arg(long)]
    gap: Option<SignedDuration>,
}

/// CLI-facing label preset, mapped to domain `Labels`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelsArg {
    /// question / answer / exchange
    En,
    /// 質問 / 回答 / やりとり
    Ja,
}

impl LabelsArg {
    fn to_domain(self) -> Labels {
        match self {
            Self::En => Labels::english(),
            Self::Ja => Labels::japanese(),
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Format {
            input,
            out,
            stdout,
            labels,
            report,
            segmentation,
        } => {
            let gap = config
                .resolve_gap(segmentation.gap)
                .map_err(|e| e.to_string())?;
            let labels = config.resolve_labels(labels.map(LabelsArg::to_domain));
            let destination = if stdout {
                None
            } else {
                Some(out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)))
            };
            cmd_format(&input, destination.as_deref(), gap, &labels, report)
        }
        Command::Tickets {
            input,
            segmentation,
        } => {
            let gap = config
                .resolve_gap(segmentation.gap)
                .map_err(|e| e.to_string())?;
            cmd_tickets(&input, gap)
        }
    }
}

fn load(input: &Path) -> Result<Vec<LogEntry>, String> {
    source::load_csv(input).map_err(|e| format!("failed to load {}: {e}", input.display()))
}

fn cmd_format(
    input: &Path,
    destination: Option<&Path>,
    gap: SignedDuration,
    labels: &Labels,
    report: bool,
) -> Result<(), String> {
    let entries = load(input)?;
    let transcript = pipeline::run(entries, gap, labels);
    let text = transcript.to_text();

    match destination {
        Some(path) => {
            fs::write(path, &text)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        }
        None => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }

    if report {
        let json = serde_json::to_string_pretty(&transcript)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        eprintln!("{json}");
    } else {
        eprintln!("{}", format_summary(&transcript.stats, destination));
    }

    Ok(())
}

fn cmd_tickets(input: &Path, gap: SignedDuration) -> Result<(), String> {
    let mut entries = load(input)?;
    pipeline::order(&mut entries);
    let ticketed = pipeline::sessionize(&entries, gap);
    let blocks = pipeline::merge_blocks(&ticketed);

    let mut count = 0;
    for ticket in pipeline::tickets(&blocks) {
        println!("{}", format_ticket(ticket));
        count += 1;
    }
    if count == 0 {
        println!("No tickets");
    }

    Ok(())
}
