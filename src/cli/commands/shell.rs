//! Shell completion generation.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::PomoError;

/// Render completions for the given shell to a string.
///
/// # Errors
///
/// Returns `PomoError::Config` if the generated script is not valid
/// UTF-8.
pub fn completions(shell: clap_complete::Shell) -> Result<String, PomoError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);

    String::from_utf8(buf)
        .map_err(|e| PomoError::Config(format!("Failed to render completions: {e}")))
}
