//! promptgen: assemble system prompts from configuration records and presets.
//!
//! This is the main entry point for the `promptgen` CLI. It parses arguments,
//! loads settings, installs logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use promptgen::error::Result;
use promptgen::exit_codes;
use promptgen::logging;
use promptgen::settings::Settings;
use std::process::ExitCode;

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply_env_overrides()?;
    Ok(settings)
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    logging::init(cli.verbose, &settings.log_level);
    commands::dispatch(cli.command, &settings)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
