//! Human-readable output formatting.

use colored::Colorize;

use crate::session::record::SessionLog;
use crate::session::stats::StatsSnapshot;

/// Render the stats block shown after sessions and by `pomo stats`.
#[must_use]
pub fn format_stats_pretty(snapshot: &StatsSnapshot) -> String {
    let mut lines = Vec::new();

    lines.push(format!("📊 {}", "Your Pomodoro Stats".bold()));
    lines.push("─".repeat(30));
    lines.push(format!(
        "Today:     {} sessions ({} min)",
        snapshot.today_sessions, snapshot.minutes_today
    ));
    lines.push(format!(
        "This week: {} sessions ({} min)",
        snapshot.week_sessions, snapshot.minutes_week
    ));
    lines.push("─".repeat(30));

    lines.join("\n")
}

/// Render recent sessions as a table, newest first.
#[must_use]
pub fn format_history_pretty(log: &SessionLog, limit: usize) -> String {
    if log.is_empty() {
        return "No sessions recorded yet.\n\nStart one with: pomo work".to_string();
    }

    let mut lines = Vec::new();
    lines.push(format!("📋 {}", "Recent Sessions".bold()));
    lines.push("─".repeat(44));
    lines.push(format!(
        "{:<18} {:<7} {:>9}  {}",
        "Ended", "Type", "Duration", "Status"
    ));
    lines.push("─".repeat(44));

    for record in log.sessions.iter().rev().take(limit) {
        // Fall back to the raw value rather than hiding a bad timestamp.
        let ended = record.end_time().map_or_else(
            |_| record.timestamp.clone(),
            |t| t.format("%Y-%m-%d %H:%M").to_string(),
        );
        let status = if record.completed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };

        lines.push(format!(
            "{:<18} {:<7} {:>8}m  {}",
            ended, record.kind, record.duration, status
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::record::{SessionRecord, SessionType};

    #[test]
    fn test_stats_block_shows_both_windows() {
        let rendered = format_stats_pretty(&StatsSnapshot {
            today_sessions: 2,
            week_sessions: 7,
            minutes_today: 50,
            minutes_week: 175,
        });

        assert!(rendered.contains("Today:     2 sessions (50 min)"));
        assert!(rendered.contains("This week: 7 sessions (175 min)"));
    }

    #[test]
    fn test_empty_history_suggests_starting() {
        let rendered = format_history_pretty(&SessionLog::default(), 10);
        assert!(rendered.contains("No sessions recorded yet"));
    }

    #[test]
    fn test_history_is_newest_first_and_limited() {
        let mut log = SessionLog::default();
        for hour in 9..12 {
            log.push(SessionRecord {
                kind: SessionType::Work,
                duration: 25,
                completed: true,
                timestamp: format!("2024-01-08T{hour:02}:00:00"),
            });
        }

        let rendered = format_history_pretty(&log, 2);
        assert!(rendered.contains("2024-01-08 11:00"));
        assert!(rendered.contains("2024-01-08 10:00"));
        assert!(!rendered.contains("2024-01-08 09:00"));

        let eleven = rendered.find("11:00").unwrap();
        let ten = rendered.find("10:00").unwrap();
        assert!(eleven < ten);
    }

    #[test]
    fn test_history_shows_raw_value_for_bad_timestamp() {
        let mut log = SessionLog::default();
        log.push(SessionRecord {
            kind: SessionType::Work,
            duration: 25,
            completed: false,
            timestamp: "mystery".to_string(),
        });

        let rendered = format_history_pretty(&log, 10);
        assert!(rendered.contains("mystery"));
    }
}
