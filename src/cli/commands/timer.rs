//! Timer command implementations.
//!
//! Owns everything the countdown shows on screen: the live progress line,
//! keyboard cancellation, and the break prompt. The session lifecycle
//! itself lives in the session runner; this layer only presents it.

use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::error::PomoError;
use crate::output;
use crate::session::record::SessionType;
use crate::session::runner::{Presenter, SessionRunner};
use crate::session::store::SessionStore;
use crate::session::timer::{format_mmss, CancelToken, Outcome, Progress};

const BAR_WIDTH: usize = 30;

/// Run a full work+break cycle, then show stats.
///
/// # Errors
///
/// Propagates store and aggregation failures.
pub fn start(
    store: &SessionStore,
    config: Config,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let clock = SystemClock;
    let runner = SessionRunner::new(&clock, store, config);
    let cancel = CancelToken::new();
    let mut presenter = TerminalPresenter::new(cancel.clone());

    let cycle = runner.run_cycle(&cancel, &mut presenter)?;

    if cycle
        .break_session
        .is_some_and(|rest| rest.completed)
    {
        println!();
        println!("🎉 {}", "Break over! Ready for another round?".bold());
    }

    let snapshot = runner.stats()?;
    output::format_stats(&snapshot, format)
}

/// Run a single work session, then show stats.
///
/// # Errors
///
/// Propagates store and aggregation failures.
pub fn work(
    store: &SessionStore,
    config: Config,
    duration: Option<u32>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let clock = SystemClock;
    let runner = SessionRunner::new(&clock, store, config);
    let cancel = CancelToken::new();
    let mut presenter = TerminalPresenter::new(cancel.clone());

    let minutes = duration.unwrap_or(config.work_minutes);
    runner.run_session(SessionType::Work, minutes, &cancel, &mut presenter)?;

    let snapshot = runner.stats()?;
    output::format_stats(&snapshot, format)
}

/// Run a single break session.
///
/// # Errors
///
/// Propagates store failures.
pub fn take_break(
    store: &SessionStore,
    config: Config,
    duration: Option<u32>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let clock = SystemClock;
    let runner = SessionRunner::new(&clock, store, config);
    let cancel = CancelToken::new();
    let mut presenter = TerminalPresenter::new(cancel.clone());

    let minutes = duration.unwrap_or(config.break_minutes);
    let outcome = runner.run_session(SessionType::Break, minutes, &cancel, &mut presenter)?;

    match format {
        OutputFormat::Json => output::to_json(&outcome),
        OutputFormat::Pretty => Ok(String::new()),
    }
}

/// Terminal presenter: renders the live countdown line and watches the
/// keyboard for cancellation.
pub struct TerminalPresenter {
    cancel: CancelToken,
    raw_mode: bool,
}

impl TerminalPresenter {
    /// Create a presenter that flips `cancel` when the user aborts.
    #[must_use]
    pub const fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            raw_mode: false,
        }
    }

    /// Drain pending key events without blocking the countdown. Runs on
    /// the countdown thread itself, so cancellation needs no extra
    /// threads; it is observed within one tick.
    fn poll_keys(&self) {
        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c');
                    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        self.cancel.cancel();
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    fn clear_line() {
        print!("\r{}\r", " ".repeat(60));
        let _ = io::stdout().flush();
    }
}

impl Presenter for TerminalPresenter {
    fn session_started(&mut self, kind: SessionType, minutes: u32) {
        println!();
        println!(
            "🍅 {} - {} minutes",
            format!("{} Session", kind.display_name()).bold(),
            minutes
        );
        println!("{}", "Press q, Esc, or Ctrl+C to stop".dimmed());
        println!();

        self.raw_mode = terminal::enable_raw_mode().is_ok();
    }

    fn tick(&mut self, progress: &Progress) {
        self.poll_keys();

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (progress.fraction * BAR_WIDTH as f64) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled.min(BAR_WIDTH)),
            "░".repeat(BAR_WIDTH.saturating_sub(filled))
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (progress.fraction * 100.0) as u32;

        print!(
            "\r⏱  {} [{}] {:>3}%",
            format_mmss(progress.remaining_seconds),
            bar,
            percent
        );
        let _ = io::stdout().flush();
    }

    fn session_ended(&mut self, outcome: &Outcome) {
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
        }

        Self::clear_line();
        if outcome.completed {
            println!("⏱  {} - {}", format_mmss(0), "Complete!".green().bold());
        } else {
            println!("⏹  {}", "Session stopped early".yellow());
        }
    }

    fn confirm_break(&mut self) -> bool {
        println!();
        println!("✅ {}", "Work session complete! Time for a break.".green());
        print!("Press Enter to start the break (or n to skip): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        !line.trim().eq_ignore_ascii_case("n")
    }
}
