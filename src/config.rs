//! chatlog configuration.
//!
//! Loaded from `~/.chatlog/config.toml`. Every key is optional and a missing
//! file means defaults:
//!
//! ```toml
//! gap = "15m"
//!
//! [labels]
//! question = "question"
//! answer = "answer"
//! exchange = "exchange"
//! ```
//!
//! The gap is resolved through a chain, first hit wins:
//!
//! 1. `--gap <duration>` on the command line
//! 2. `CHATLOG_GAP` env var
//! 3. `gap` in the config file
//! 4. 15 minutes

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use jiff::SignedDuration;
use serde::Deserialize;

use crate::model::Labels;

/// Idle time after which a new question opens a new ticket.
pub const DEFAULT_GAP: SignedDuration = SignedDuration::from_mins(15);

/// Environment variable overriding the configured gap.
pub const GAP_ENV: &str = "CHATLOG_GAP";

/// Errors that can occur while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid gap {value:?} from {origin}: {source}")]
    Gap {
        value: String,
        origin: &'static str,
        source: jiff::Error,
    },

    #[error("gap must not be negative, got {0}")]
    NegativeGap(SignedDuration),
}

/// chatlog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Ticket gap as a duration string: `"15m"`, `"PT15M"`, `"1h 30m"`.
    pub gap: Option<String>,

    /// Section labels. Missing keys fall back to English.
    pub labels: Option<Labels>,
}

impl Config {
    /// Load config from `~/.chatlog/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.chatlog/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".chatlog").join("config.toml"))
    }

    /// Resolve the ticket gap from flag, environment, file, then default.
    pub fn resolve_gap(&self, explicit: Option<SignedDuration>) -> Result<SignedDuration, ConfigError> {
        let from_env = env::var(GAP_ENV).ok().filter(|s| !s.is_empty());
        resolve_gap(explicit, from_env.as_deref(), self.gap.as_deref())
    }

    /// Resolve section labels: an explicit preset wins over the config file.
    pub fn resolve_labels(&self, preset: Option<Labels>) -> Labels {
        preset
            .or_else(|| self.labels.clone())
            .unwrap_or_default()
    }
}

fn resolve_gap(
    explicit: Option<SignedDuration>,
    from_env: Option<&str>,
    from_file: Option<&str>,
) -> Result<SignedDuration, ConfigError> {
    let gap = if let Some(gap) = explicit {
        gap
    } else if let Some(value) = from_env {
        parse_gap(value, GAP_ENV)?
    } else if let Some(value) = from_file {
        parse_gap(value, "config file")?
    } else {
        DEFAULT_GAP
    };

    if gap.is_negative() {
        return Err(ConfigError::NegativeGap(gap));
    }
    Ok(gap)
}

fn parse_gap(value: &str, origin: &'static str) -> Result<SignedDuration, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Gap {
        value: value.to_string(),
        origin,
        source,
    })
}
