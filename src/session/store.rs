//! Durable storage for the session log.
//!
//! The log lives in a single JSON file whose path is injected at
//! construction. Every `append` re-reads the file, extends the log in
//! memory, and replaces the file through a temp-file rename, so a write
//! that fails partway leaves the previous log intact. No state is cached
//! between calls.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PomoError;

use super::record::{SessionLog, SessionRecord};

/// File-backed store for the session log. Sole reader and writer of the
/// on-disk representation.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full session log.
    ///
    /// A missing file is an empty log, not an error.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::StorageIo` if the file cannot be read, or
    /// `PomoError::CorruptLog` if it exists but does not parse as the
    /// expected format.
    pub fn load(&self) -> Result<SessionLog, PomoError> {
        if !self.path.exists() {
            return Ok(SessionLog::default());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            PomoError::StorageIo(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&json)
            .map_err(|e| PomoError::CorruptLog(format!("{}: {e}", self.path.display())))
    }

    /// Append one record and rewrite the log on disk.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::StorageIo` if the rewrite cannot complete, or a
    /// load error if the existing log cannot be read back first. Either
    /// way the previous on-disk state survives.
    pub fn append(&self, record: SessionRecord) -> Result<(), PomoError> {
        let mut log = self.load()?;
        log.push(record);
        self.replace(&log)
    }

    /// Atomically replace the on-disk log.
    fn replace(&self, log: &SessionLog) -> Result<(), PomoError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PomoError::StorageIo(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(log).map_err(|e| {
            PomoError::StorageIo(format!("Failed to serialize session log: {e}"))
        })?;

        // Write the new log beside the target, then rename over it, so an
        // interrupted write never truncates the existing file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| {
            PomoError::StorageIo(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            PomoError::StorageIo(format!("Failed to replace {}: {e}", self.path.display()))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::record::SessionType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(kind: SessionType, duration: u32, completed: bool) -> SessionRecord {
        let ended = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        SessionRecord::new(kind, duration, completed, ended)
    }

    #[test]
    fn test_load_missing_file_is_empty_log() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("sessions.json"));

        let log = store.load().unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("sessions.json"));

        let first = record(SessionType::Work, 25, true);
        store.append(first.clone()).unwrap();

        let log = store.load().unwrap();
        assert_eq!(log.sessions, vec![first]);
    }

    #[test]
    fn test_append_preserves_prior_records() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("sessions.json"));

        let first = record(SessionType::Work, 25, true);
        let second = record(SessionType::Break, 5, false);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let log = store.load().unwrap();
        assert_eq!(log.sessions, vec![first, second]);
    }

    #[test]
    fn test_append_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("deep").join("sessions.json");
        let store = SessionStore::new(nested.clone());

        store.append(record(SessionType::Work, 25, true)).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        fs::write(&path, "definitely not json").unwrap();

        let err = SessionStore::new(path).load().unwrap_err();
        assert!(matches!(err, PomoError::CorruptLog(_)));
    }

    #[test]
    fn test_append_to_corrupt_file_leaves_it_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        fs::write(&path, "definitely not json").unwrap();

        let store = SessionStore::new(path.clone());
        assert!(store.append(record(SessionType::Work, 25, true)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "definitely not json");
    }

    #[test]
    fn test_written_file_uses_wire_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions.json");
        let store = SessionStore::new(path.clone());

        store.append(record(SessionType::Work, 25, true)).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"sessions\""));
        assert!(raw.contains("\"type\": \"work\""));
        assert!(raw.contains("\"duration\": 25"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("sessions.json"));

        store.append(record(SessionType::Work, 25, true)).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["sessions.json"]);
    }
}
