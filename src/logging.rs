//! Log setup for the binaries.
//!
//! stdout belongs to the terminal UI, so logs only go to a file, and only when
//! one is asked for. The filter comes from `RUST_LOG` (default `info`).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Returns false when `path` is `None`.
pub fn init_file_logging(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))?;
    Ok(true)
}
