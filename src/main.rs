//! chatlog: segment chat logs into tickets and render them as
//! question/answer sections.
//!
//! Logging: set `RUST_LOG=chatlog=debug` to see ticket boundaries on stderr.

mod cli;
mod config;
mod model;
mod pipeline;
mod source;

use std::{io, process};

use tracing_subscriber::EnvFilter;

use config::Config;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatlog=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
