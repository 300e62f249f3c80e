mod cli;
mod config;
mod error;
mod git;
mod keys;
mod setup;

use clap::Parser;

use cli::{Cli, Command};
use error::SetupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Silent,
    Error,
}

impl LogLevel {
    // "error" is the only level with an effect; anything else stays silent.
    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("error") => LogLevel::Error,
            _ => LogLevel::Silent,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let log_level = LogLevel::from_flag(cli.log.as_deref());

    if let Err(err) = run(&cli) {
        report_error(&err, log_level);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SetupError> {
    let config = config::load_config()?;

    match &cli.command {
        Command::SetupGitsign {
            email,
            connector_id,
        } => setup::run_setup(&config, email.as_deref(), connector_id),
        Command::ClearGitsign => setup::run_clear(),
    }
}

// Failures only surface at the "error" level. Whatever the git subprocess
// printed on its own stderr is visible regardless.
fn report_error(err: &SetupError, log_level: LogLevel) {
    if log_level == LogLevel::Error {
        println!("{}", err);
    }
}
