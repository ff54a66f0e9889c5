use std::process::ExitCode;

use clap::Parser;

mod args;
mod commands;
mod logging;


use args::Cli;

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    logging::init();

    // Usage errors and --help exit here, with clap's own status codes.
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    if commands::execute(cli.command, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
