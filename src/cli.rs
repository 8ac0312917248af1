//! CLI command implementations for Jungle.

pub(crate) mod board;
pub(crate) mod draw;
pub(crate) mod play;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use thiserror::Error;

/// Output format for the `run` and `board` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Bad command-line input.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Script(#[from] jungle::ScriptError),
    #[error(transparent)]
    Setup(#[from] jungle::SetupError),
}

impl CliError {
    /// Create a usage error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Use the given seed or derive one from the clock.
pub(crate) fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
            .unwrap_or(42)
    })
}
