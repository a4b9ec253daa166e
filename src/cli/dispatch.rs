//! Command dispatch logic extracted from binary to reduce main function size.

use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers::{handle_check, handle_classify, handle_levels, Session};
use crate::exit::AtomlintExit;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<AtomlintExit> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(AtomlintExit::Success);
    };

    let session = Session::open(cli.config.as_deref())?;

    match command {
        Commands::Check { paths, json } => handle_check(&session, &paths, json),
        Commands::Levels => handle_levels(&session),
        Commands::Classify { paths } => handle_classify(&session, &paths),
    }
}
