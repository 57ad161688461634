//! Session records and the persisted log format.
//!
//! The on-disk schema is part of the compatibility surface: a top-level
//! `sessions` array of objects with `type`, `duration`, `completed`, and
//! `timestamp` fields. Unknown extra fields are tolerated on read.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// Kind of interval a session ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// A focused work interval.
    Work,
    /// A rest interval between work sessions.
    Break,
}

impl SessionType {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// Check if this is a break session.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One completed-or-interrupted interval, as persisted.
///
/// Immutable once created. `duration` is the scheduled length in minutes,
/// never the time actually spent, and `timestamp` is the local ISO-8601
/// instant the session ended. The timestamp stays a raw string here so one
/// unreadable value cannot prevent the rest of the log from loading; it is
/// parsed where it is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session kind, serialized as `"work"` or `"break"`.
    #[serde(rename = "type")]
    pub kind: SessionType,
    /// Scheduled duration in minutes.
    pub duration: u32,
    /// Whether the countdown reached zero without interruption.
    pub completed: bool,
    /// ISO-8601 local datetime the session ended.
    pub timestamp: String,
}

impl SessionRecord {
    /// Create a record for a session that ended at `ended_at`.
    #[must_use]
    pub fn new(kind: SessionType, duration: u32, completed: bool, ended_at: NaiveDateTime) -> Self {
        Self {
            kind,
            duration,
            completed,
            timestamp: ended_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }

    /// Parse the recorded end time.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::RecordParse` if the stored timestamp is not a
    /// valid ISO-8601 datetime.
    pub fn end_time(&self) -> Result<NaiveDateTime, PomoError> {
        self.timestamp.parse().map_err(|e| {
            PomoError::RecordParse(format!(
                "bad timestamp {:?} on {} session: {e}",
                self.timestamp, self.kind
            ))
        })
    }
}

/// Ordered, append-only sequence of session records.
///
/// Insertion order is preserved; the application never edits or deletes
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    /// All recorded sessions, oldest first.
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

impl SessionLog {
    /// Append a record to the log.
    pub fn push(&mut self, record: SessionRecord) {
        self.sessions.push(record);
    }

    /// Check whether any sessions have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
