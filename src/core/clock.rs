//! Time source abstraction.

use chrono::{Local, NaiveDateTime};

/// Supplies the current local time.
///
/// The countdown engine measures elapsed wall-clock time through this trait
/// and the session log records end-of-session timestamps from it, so tests
/// can substitute a scripted implementation for deterministic runs.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local time, timezone-naive.
    fn now(&self) -> NaiveDateTime;
}

/// The real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
