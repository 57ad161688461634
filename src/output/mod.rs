//! Output formatting.
//!
//! Dispatches between human-readable and JSON renderings of the core
//! results. Live countdown rendering lives with the CLI commands; this
//! module only formats final values.

mod json;
mod pretty;

pub use json::to_json;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::session::record::SessionLog;
use crate::session::stats::StatsSnapshot;

/// Format a stats snapshot.
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn format_stats(snapshot: &StatsSnapshot, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_stats_pretty(snapshot)),
        OutputFormat::Json => json::to_json(snapshot),
    }
}

/// Format the most recent sessions, newest first.
///
/// # Errors
///
/// Returns `PomoError::Json` if JSON serialization fails.
pub fn format_history(
    log: &SessionLog,
    limit: usize,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_history_pretty(log, limit)),
        OutputFormat::Json => {
            let recent: Vec<_> = log.sessions.iter().rev().take(limit).collect();
            json::to_json(&recent)
        }
    }
}
