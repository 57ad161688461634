//! Interactive menu, shown when pomo runs without a subcommand.
//!
//! Errors from a chosen action are printed and the menu continues;
//! quitting (or end of input) ends the program normally.

use std::io::{self, Write};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomoError;
use crate::session::store::SessionStore;

use super::{start, stats, take_break, work};

/// Run the interactive menu loop.
///
/// # Errors
///
/// This function itself only fails on broken standard input; action
/// errors are reported inline and the loop continues.
pub fn menu(store: &SessionStore, config: Config, format: OutputFormat) -> Result<(), PomoError> {
    println!("{}", "=".repeat(40));
    println!("🍅 {}", "POMODORO TIMER".bold());
    println!("{}", "=".repeat(40));

    loop {
        println!();
        println!("Options:");
        println!(
            "  [s] Start Pomodoro ({} min work + {} min break)",
            config.work_minutes, config.break_minutes
        );
        println!("  [w] Work session only ({} min)", config.work_minutes);
        println!("  [b] Break only ({} min)", config.break_minutes);
        println!("  [t] View stats");
        println!("  [q] Quit");
        print!("\nChoice: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .map_err(|e| PomoError::Config(format!("Failed to read input: {e}")))?;
        if read == 0 {
            // End of input; same exit as quitting.
            break;
        }

        let choice = line.trim().to_lowercase();
        let result = match choice.as_str() {
            "s" => start(store, config, format).map(Some),
            "w" => work(store, config, None, format).map(Some),
            "b" => take_break(store, config, None, format).map(Some),
            "t" => stats(store, format).map(Some),
            "q" => {
                println!();
                println!("👋 Goodbye! Keep being productive!");
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
                Ok(None)
            }
        };

        match result {
            Ok(Some(output)) if !output.is_empty() => println!("\n{output}"),
            Ok(_) => {}
            Err(e) => eprintln!("{}: {e}", "error".red().bold()),
        }
    }

    Ok(())
}
