//! Session statistics.
//!
//! Aggregates the persisted log into today/this-week counts and minute
//! totals. Pure over its inputs: the same log and reference instant always
//! produce the same snapshot.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::datetime::{today_start, week_start};
use crate::error::PomoError;

use super::record::{SessionLog, SessionType};

/// Aggregated counts for the two reporting windows.
///
/// Windows overlap rather than partition: today is a subset of the week,
/// so a session counted today is always counted in the week totals too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Completed work sessions since local midnight.
    pub today_sessions: u32,
    /// Completed work sessions since Monday of the current week.
    pub week_sessions: u32,
    /// Scheduled minutes of those sessions, today.
    pub minutes_today: u64,
    /// Scheduled minutes of those sessions, this week.
    pub minutes_week: u64,
}

/// Compute statistics over `log` as seen from `reference`.
///
/// Only completed work sessions contribute; breaks and interrupted
/// sessions are skipped before their timestamps are even looked at.
/// Attribution is by the recorded end-of-session timestamp.
///
/// # Errors
///
/// Returns `PomoError::RecordParse` naming the offending record if a
/// counted record's timestamp does not parse. Corrupt data is surfaced,
/// never silently skipped.
pub fn compute(log: &SessionLog, reference: NaiveDateTime) -> Result<StatsSnapshot, PomoError> {
    let day_floor = today_start(reference);
    let week_floor = week_start(reference);

    let mut snapshot = StatsSnapshot::default();

    for (index, record) in log.sessions.iter().enumerate() {
        if record.kind != SessionType::Work || !record.completed {
            continue;
        }

        let ended: NaiveDateTime = record.timestamp.parse().map_err(|e| {
            PomoError::RecordParse(format!(
                "record {index} ({} {}m): bad timestamp {:?}: {e}",
                record.kind, record.duration, record.timestamp
            ))
        })?;

        if ended >= day_floor {
            snapshot.today_sessions += 1;
            snapshot.minutes_today += u64::from(record.duration);
        }
        if ended >= week_floor {
            snapshot.week_sessions += 1;
            snapshot.minutes_week += u64::from(record.duration);
        }
    }

    Ok(snapshot)
}
