use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::session::store::SessionStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(root) => Paths::with_root(root),
        None => Paths::new()?,
    };
    let config = Config::load(&paths.config_file)?;
    let store = SessionStore::new(paths.sessions_file);
    let format = cli.output;

    let Some(command) = cli.command else {
        commands::menu(&store, config, format)?;
        return Ok(());
    };

    let output = match command {
        Commands::Start => commands::start(&store, config, format)?,
        Commands::Work { duration } => commands::work(&store, config, duration, format)?,
        Commands::Break { duration } => commands::take_break(&store, config, duration, format)?,
        Commands::Stats => commands::stats(&store, format)?,
        Commands::History { limit } => commands::history(&store, limit, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
