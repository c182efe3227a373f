//! Templator: create notes and other text files from reusable templates.
//!
//! This is the main entry point for the `templator` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and reports errors
//! through the terminal with proper exit codes.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod fs;
mod interaction;
mod resolver;
mod templates;

#[cfg(test)]
mod test_support;

use cli::Cli;
use interaction::{Interaction, TerminalInteraction};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "TEMPLATOR_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let mut ui = TerminalInteraction::stdio();

    match commands::dispatch(cli, &mut ui) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Cancellation ends the command without a message.
            match err.notice_level() {
                Some(level) => ui.notify(level, &err.to_string()),
                None => debug!("command cancelled by user"),
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialize tracing on stderr. `TEMPLATOR_LOG` wins over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    debug!("templator started with verbosity level: {}", verbose);
}
