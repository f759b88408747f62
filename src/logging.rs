//! Global `tracing` subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber.
///
/// `filter` uses `RUST_LOG` syntax (e.g. `info,sqlx=warn`). `format` is
/// `json` for one JSON object per line; anything else gives human-readable
/// text.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is
/// already installed.
pub fn init(filter: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).context("Invalid log filter")?;

    let installed = if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
