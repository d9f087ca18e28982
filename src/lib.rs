//! ideas: a small local-first idea list.
//!
//! Ideas are short free-text records (title, category, notes) that move
//! through three stages: `idea` → `planned` → `implemented`. The whole list is
//! kept in one human-readable JSON document, `ideas.json`, inside a data
//! directory that defaults to `data/` next to the executable.
//!
//! # Examples
//!
//! ```bash
//! ideas add "Public pools per 100,000 residents" -c Infrastructure -n "state statistics office"
//! ideas list -s planned
//! ideas status 1 planned
//! ideas delete 1
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: storage, error type, timestamps and text rendering
//! - [`plugins`]: the ideas subsystem (model, operations, command handlers)
//! - [`cli`]: clap argument definitions

pub mod cli;
pub mod core;
pub mod plugins;

use crate::core::error::IdeasError;
use crate::core::store::{Store, StoreConfig};
use clap::Parser;
use cli::Cli;
use plugins::ideas;
use tracing_subscriber::EnvFilter;

/// Parses process arguments and runs the selected command.
pub fn run() -> Result<(), IdeasError> {
    let cli = Cli::parse();
    run_with(cli)
}

/// Runs an already-parsed command line.
pub fn run_with(cli: Cli) -> Result<(), IdeasError> {
    init_tracing();

    let config = match cli.data_dir {
        Some(dir) => StoreConfig::new(dir),
        None => StoreConfig::default_location()?,
    };
    tracing::debug!(data_dir = %config.data_dir.display(), "using idea store");
    let store = Store::new(config);

    ideas::run_ideas_cli(&store, cli.format, &cli.command)
}

/// Log events go to stderr so they never mix with command output.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
