//! Stats and history command implementations.

use crate::cli::args::OutputFormat;
use crate::core::clock::{Clock, SystemClock};
use crate::error::PomoError;
use crate::output;
use crate::session::stats::compute;
use crate::session::store::SessionStore;

/// Show aggregate statistics for today and the current week.
///
/// # Errors
///
/// Propagates load and record parse failures.
pub fn stats(store: &SessionStore, format: OutputFormat) -> Result<String, PomoError> {
    let log = store.load()?;
    let snapshot = compute(&log, SystemClock.now())?;
    output::format_stats(&snapshot, format)
}

/// Show the most recent sessions from the log.
///
/// # Errors
///
/// Propagates load failures.
pub fn history(
    store: &SessionStore,
    limit: usize,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let log = store.load()?;
    output::format_history(&log, limit, format)
}
