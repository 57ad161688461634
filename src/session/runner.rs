//! Session orchestration.
//!
//! Glues the countdown engine, the store, and the aggregator into the two
//! user-facing flows: a single session of a given kind, and a full
//! work-plus-break cycle. Holds no state of its own beyond sequencing.

use std::time::Duration;

use crate::config::Config;
use crate::core::clock::Clock;
use crate::error::PomoError;

use super::record::{SessionRecord, SessionType};
use super::stats::{self, StatsSnapshot};
use super::store::SessionStore;
use super::timer::{CancelToken, Countdown, Outcome, Progress, TICK_INTERVAL};

/// Presentation seam for the flows the runner drives.
///
/// The terminal layer implements this; tests stub it. Rendering and
/// prompting live entirely behind it so the runner stays free of I/O
/// beyond the store.
pub trait Presenter {
    /// A countdown is about to start.
    fn session_started(&mut self, kind: SessionType, minutes: u32);
    /// One countdown tick.
    fn tick(&mut self, progress: &Progress);
    /// A countdown ended, before its record is persisted.
    fn session_ended(&mut self, outcome: &Outcome);
    /// Ask whether the break should start after a completed work session.
    fn confirm_break(&mut self) -> bool;
}

/// Result of a full work-plus-break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// The work session's outcome.
    pub work: Outcome,
    /// The break's outcome, if the work session completed and the break
    /// was taken.
    pub break_session: Option<Outcome>,
}

/// Composes the countdown engine, the session store, and the aggregator.
pub struct SessionRunner<'a, C> {
    clock: &'a C,
    store: &'a SessionStore,
    config: Config,
    tick: Duration,
}

impl<'a, C: Clock> SessionRunner<'a, C> {
    /// Create a runner over the given collaborators.
    pub fn new(clock: &'a C, store: &'a SessionStore, config: Config) -> Self {
        Self {
            clock,
            store,
            config,
            tick: TICK_INTERVAL,
        }
    }

    /// Override the countdown tick interval. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Run one session and persist its record.
    ///
    /// The record's timestamp is taken when the session ends, completed or
    /// not, and its duration is always the scheduled minutes.
    ///
    /// # Errors
    ///
    /// Propagates store failures; the countdown itself cannot fail.
    pub fn run_session(
        &self,
        kind: SessionType,
        minutes: u32,
        cancel: &CancelToken,
        presenter: &mut dyn Presenter,
    ) -> Result<Outcome, PomoError> {
        presenter.session_started(kind, minutes);

        let countdown = Countdown::new(self.clock).with_tick(self.tick);
        let outcome = countdown.run(kind, minutes, cancel, |p| presenter.tick(p));

        presenter.session_ended(&outcome);

        let record = SessionRecord::new(kind, minutes, outcome.completed, self.clock.now());
        self.store.append(record)?;

        Ok(outcome)
    }

    /// Run a work session and, if it completed and the presenter confirms,
    /// the paired break.
    ///
    /// # Errors
    ///
    /// Propagates store failures from either session.
    pub fn run_cycle(
        &self,
        cancel: &CancelToken,
        presenter: &mut dyn Presenter,
    ) -> Result<CycleOutcome, PomoError> {
        let work = self.run_session(
            SessionType::Work,
            self.config.work_minutes,
            cancel,
            presenter,
        )?;

        if !work.completed {
            return Ok(CycleOutcome {
                work,
                break_session: None,
            });
        }

        let break_session = if presenter.confirm_break() {
            Some(self.run_session(
                SessionType::Break,
                self.config.break_minutes,
                cancel,
                presenter,
            )?)
        } else {
            None
        };

        Ok(CycleOutcome {
            work,
            break_session,
        })
    }

    /// Load the log and aggregate it as of now.
    ///
    /// Always re-reads the store so the windows stay correct across
    /// midnight and week boundaries.
    ///
    /// # Errors
    ///
    /// Propagates load failures and record parse failures.
    pub fn stats(&self) -> Result<StatsSnapshot, PomoError> {
        let log = self.store.load()?;
        stats::compute(&log, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::MockClock;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Mock clock advancing 30 seconds per call.
    fn half_minute_clock() -> MockClock {
        let calls = Arc::new(AtomicI64::new(0));
        let base = base_time();
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            base + chrono::Duration::seconds(n * 30)
        });
        clock
    }

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[derive(Default)]
    struct StubPresenter {
        started: Vec<(SessionType, u32)>,
        ticks: usize,
        ended: Vec<Outcome>,
        accept_break: bool,
        break_prompts: usize,
    }

    impl Presenter for StubPresenter {
        fn session_started(&mut self, kind: SessionType, minutes: u32) {
            self.started.push((kind, minutes));
        }

        fn tick(&mut self, _progress: &Progress) {
            self.ticks += 1;
        }

        fn session_ended(&mut self, outcome: &Outcome) {
            self.ended.push(*outcome);
        }

        fn confirm_break(&mut self) -> bool {
            self.break_prompts += 1;
            self.accept_break
        }
    }

    fn runner_fixture(dir: &TempDir) -> (MockClock, SessionStore, Config) {
        let store = SessionStore::new(dir.path().join("sessions.json"));
        (half_minute_clock(), store, Config::default())
    }

    #[test]
    fn test_completed_session_is_persisted() {
        let dir = TempDir::new().unwrap();
        let (clock, store, config) = runner_fixture(&dir);
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter::default();

        let outcome = runner
            .run_session(
                SessionType::Work,
                1,
                &CancelToken::new(),
                &mut presenter,
            )
            .unwrap();

        assert!(outcome.completed);
        assert_eq!(presenter.started, vec![(SessionType::Work, 1)]);
        assert_eq!(presenter.ended, vec![outcome]);
        assert!(presenter.ticks > 0);

        let log = store.load().unwrap();
        assert_eq!(log.sessions.len(), 1);
        assert_eq!(log.sessions[0].duration, 1);
        assert!(log.sessions[0].completed);
        assert!(log.sessions[0].end_time().unwrap() > base_time());
    }

    #[test]
    fn test_interrupted_session_keeps_scheduled_duration() {
        let dir = TempDir::new().unwrap();
        let (clock, store, config) = runner_fixture(&dir);
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter::default();

        let cancel = CancelToken::new();
        cancel.cancel();
        let outcome = runner
            .run_session(SessionType::Work, 25, &cancel, &mut presenter)
            .unwrap();

        assert!(!outcome.completed);

        let log = store.load().unwrap();
        assert_eq!(log.sessions.len(), 1);
        assert!(!log.sessions[0].completed);
        // Scheduled minutes, not the (zero) elapsed time.
        assert_eq!(log.sessions[0].duration, 25);
    }

    #[test]
    fn test_cycle_runs_break_when_confirmed() {
        let dir = TempDir::new().unwrap();
        let (clock, store, _) = runner_fixture(&dir);
        let config = Config {
            work_minutes: 1,
            break_minutes: 1,
        };
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter {
            accept_break: true,
            ..StubPresenter::default()
        };

        let cycle = runner
            .run_cycle(&CancelToken::new(), &mut presenter)
            .unwrap();

        assert!(cycle.work.completed);
        assert!(cycle.break_session.is_some());
        assert_eq!(presenter.break_prompts, 1);

        let log = store.load().unwrap();
        assert_eq!(log.sessions.len(), 2);
        assert_eq!(log.sessions[0].kind, SessionType::Work);
        assert_eq!(log.sessions[1].kind, SessionType::Break);
    }

    #[test]
    fn test_cycle_skips_break_when_declined() {
        let dir = TempDir::new().unwrap();
        let (clock, store, _) = runner_fixture(&dir);
        let config = Config {
            work_minutes: 1,
            break_minutes: 1,
        };
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter::default();

        let cycle = runner
            .run_cycle(&CancelToken::new(), &mut presenter)
            .unwrap();

        assert!(cycle.work.completed);
        assert!(cycle.break_session.is_none());
        assert_eq!(store.load().unwrap().sessions.len(), 1);
    }

    #[test]
    fn test_cycle_never_prompts_after_interrupted_work() {
        let dir = TempDir::new().unwrap();
        let (clock, store, config) = runner_fixture(&dir);
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter {
            accept_break: true,
            ..StubPresenter::default()
        };

        let cancel = CancelToken::new();
        cancel.cancel();
        let cycle = runner.run_cycle(&cancel, &mut presenter).unwrap();

        assert!(!cycle.work.completed);
        assert!(cycle.break_session.is_none());
        assert_eq!(presenter.break_prompts, 0);
        assert_eq!(store.load().unwrap().sessions.len(), 1);
    }

    #[test]
    fn test_stats_reflect_persisted_sessions() {
        let dir = TempDir::new().unwrap();
        let (clock, store, config) = runner_fixture(&dir);
        let runner = SessionRunner::new(&clock, &store, config).with_tick(Duration::ZERO);
        let mut presenter = StubPresenter::default();

        runner
            .run_session(
                SessionType::Work,
                1,
                &CancelToken::new(),
                &mut presenter,
            )
            .unwrap();

        let snapshot = runner.stats().unwrap();
        assert_eq!(snapshot.today_sessions, 1);
        assert_eq!(snapshot.minutes_today, 1);
        assert_eq!(snapshot.week_sessions, 1);
    }
}
