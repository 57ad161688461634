//! Error taxonomy for pomo.

use thiserror::Error;

/// Errors produced across the pomo library.
#[derive(Debug, Error)]
pub enum PomoError {
    /// An I/O failure while reading or writing the session log.
    #[error("storage error: {0}")]
    StorageIo(String),

    /// The session log exists but does not parse as the expected format.
    #[error("corrupt session log: {0}")]
    CorruptLog(String),

    /// A stored record could not be parsed (e.g. a malformed timestamp).
    #[error("record parse error: {0}")]
    RecordParse(String),

    /// A configuration problem (loading, parsing, or validation).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
