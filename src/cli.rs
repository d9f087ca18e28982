//! CLI struct definitions for the `ideas` command-line interface.
//!
//! All clap-derived top-level types live here; per-command arguments live
//! next to their handlers in `plugins::ideas`.

use crate::plugins::ideas::{IdeasCommand, OutputFormat};

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "ideas",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep a list of data-field ideas: add, list, re-status and delete them."
)]
pub struct Cli {
    /// Directory holding ideas.json (defaults to `data/` next to the executable).
    #[clap(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Output format for command results.
    #[clap(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: IdeasCommand,
}
