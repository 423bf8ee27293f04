//! Diagnostic logging setup
//!
//! Logs go to stderr; stdout carries the MCP protocol and must stay clean.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "todo_mcp=debug,warn";

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber
///
/// `verbose` wins over `RUST_LOG`. Fails if a subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
