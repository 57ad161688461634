use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A command-line Pomodoro timer with session tracking")]
#[command(long_about = "pomo - a command-line Pomodoro timer

Runs fixed-length work and break countdowns with a live progress bar,
logs every session, and reports how much focused work you got done
today and this week.

QUICK START:
  pomo              Interactive menu
  pomo start        Work session followed by a break
  pomo work         Work session only
  pomo stats        Today / this-week totals

Press q, Esc, or Ctrl+C during a countdown to stop it early. Stopped
sessions are logged but never count toward your stats.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Directory holding the session log and configuration
    ///
    /// Defaults to ~/.pomo. Mostly useful for scripting and tests.
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a full Pomodoro cycle: work session, then a break
    ///
    /// The break only starts if the work session completes and you
    /// confirm at the prompt. Both sessions are logged; stats are shown
    /// at the end.
    #[command(alias = "s")]
    Start,

    /// Run a single work session
    ///
    /// # Examples
    ///
    ///   pomo work                 Use the configured duration
    ///   pomo work --duration 50   One-off 50 minute session
    #[command(alias = "w")]
    Work {
        /// Session length in minutes (defaults to the configured work
        /// duration)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        duration: Option<u32>,
    },

    /// Run a single break session
    #[command(alias = "b")]
    Break {
        /// Break length in minutes (defaults to the configured break
        /// duration)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        duration: Option<u32>,
    },

    /// Show today / this-week statistics
    ///
    /// Counts completed work sessions only. The week window is
    /// Monday-aligned and includes today.
    #[command(alias = "t")]
    Stats,

    /// List recent sessions from the log
    #[command(alias = "h")]
    History {
        /// Maximum number of sessions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions bash > /etc/bash_completion.d/pomo
    ///   pomo completions zsh > ~/.zfunc/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
