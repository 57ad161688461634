//! Countdown engine.
//!
//! A countdown moves Idle → Running → Completed or Interrupted; both end
//! states are terminal and there is no pause or partial completion. While
//! running, the loop alternates a bounded sleep with a progress callback,
//! so cancellation is observed between ticks and the worst-case latency
//! from [`CancelToken::cancel`] to the run returning is one tick interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::clock::Clock;

use super::record::SessionType;

/// Default pause between countdown ticks. Fine enough for a smooth
/// progress display, coarse enough to avoid busy-spinning.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Cooperative cancellation flag shared between the countdown loop and
/// whoever requests the abort.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from any thread, any number of
    /// times.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Progress report emitted once per tick while a countdown runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Elapsed fraction of the scheduled duration, clamped to [0, 1].
    pub fraction: f64,
    /// Whole seconds left, floored, never negative.
    pub remaining_seconds: u64,
}

/// Terminal result of a countdown run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Outcome {
    /// Kind of session that ran.
    #[serde(rename = "type")]
    pub kind: SessionType,
    /// Scheduled minutes, regardless of how much time actually elapsed.
    pub minutes: u32,
    /// True iff the countdown reached zero without interruption.
    pub completed: bool,
}

/// Countdown runner over an injected clock.
pub struct Countdown<'a, C> {
    clock: &'a C,
    tick: Duration,
}

impl<'a, C: Clock> Countdown<'a, C> {
    /// Create a countdown with the default tick interval.
    pub fn new(clock: &'a C) -> Self {
        Self {
            clock,
            tick: TICK_INTERVAL,
        }
    }

    /// Override the tick interval. Tests pass `Duration::ZERO`.
    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Run a countdown of `minutes` for the given session kind.
    ///
    /// Emits progress through `on_tick` — the only side channel while
    /// running — and returns when the scheduled time has fully elapsed or
    /// `cancel` fires, whichever comes first. A token cancelled before the
    /// first tick yields the same interrupted outcome as one cancelled
    /// mid-run, and the outcome always reports the scheduled minutes, not
    /// elapsed time.
    pub fn run(
        &self,
        kind: SessionType,
        minutes: u32,
        cancel: &CancelToken,
        mut on_tick: impl FnMut(&Progress),
    ) -> Outcome {
        let total_ms = i64::from(minutes) * 60 * 1000;
        let start = self.clock.now();

        loop {
            if cancel.is_cancelled() {
                return Outcome {
                    kind,
                    minutes,
                    completed: false,
                };
            }

            let elapsed_ms = self
                .clock
                .now()
                .signed_duration_since(start)
                .num_milliseconds();

            if elapsed_ms >= total_ms {
                return Outcome {
                    kind,
                    minutes,
                    completed: true,
                };
            }

            let remaining_ms = total_ms - elapsed_ms;
            #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
            let progress = Progress {
                fraction: (elapsed_ms as f64 / total_ms as f64).clamp(0.0, 1.0),
                remaining_seconds: (remaining_ms / 1000) as u64,
            };
            on_tick(&progress);

            thread::sleep(self.tick);
        }
    }
}

/// Format a second count as `MM:SS`. Minutes are zero-padded to two digits
/// but not wrapped to hours.
#[must_use]
pub fn format_mmss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
