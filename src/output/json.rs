//! JSON output formatting.

use serde::Serialize;

use crate::error::PomoError;

/// Serialize a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `PomoError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
