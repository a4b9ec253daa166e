use clap::Parser;
use colored::Colorize;
use atomlint_core::cli::{self, Cli};
use atomlint_core::error::AtomlintError;
use atomlint_core::exit::AtomlintExit;
use atomlint_core::logging;

fn main() -> AtomlintExit {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            if matches!(e.downcast_ref::<AtomlintError>(), Some(AtomlintError::Config(_))) {
                AtomlintExit::InvalidConfig
            } else {
                AtomlintExit::Error
            }
        }
    }
}
