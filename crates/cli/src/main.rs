// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! csub - command substitution for a single command line

mod env;
mod exit_error;
mod help;
mod report;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use csub_shell::Substitutor;

use crate::exit_error::ExitError;
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(
    name = "csub",
    version,
    about = "Perform command substitution on a given command",
    override_usage = help::USAGE,
    styles = help::styles(),
    after_help = help::after_help(),
)]
struct Cli {
    /// Print arguments and the resulting command before running it
    #[arg(short = 'd', short_alias = 'D', long)]
    debug: bool,

    /// Echo the resulting command to stderr before running it
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print the resulting command instead of running it
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Command line; back-quoted parts are replaced by their output
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    command: Vec<String>,
}

impl Cli {
    fn report(&self) -> Report {
        Report {
            debug: self.debug,
            verbose: self.verbose,
            dry_run: self.dry_run,
        }
    }

    /// Positional arguments joined by single spaces.
    fn raw_command_line(&self) -> String {
        self.command.join(" ")
    }
}

fn cli_command() -> clap::Command {
    Cli::command()
}

/// Exit code for command-line usage errors, kept apart from the
/// substitution failure codes.
const USAGE_EXIT_CODE: i32 = 64;

/// Report a clap error and exit. Help and version output still exit 0.
fn exit_with_usage(err: clap::Error) -> ! {
    if err.use_stderr() {
        let _ = err.print();
        std::process::exit(USAGE_EXIT_CODE);
    }
    err.exit()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let matches = cli_command()
        .try_get_matches()
        .unwrap_or_else(|e| exit_with_usage(e));
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| exit_with_usage(e));
    setup_logging(cli.debug);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
            eprintln!("Error: {}", e);
            code
        }
    };
    std::process::exit(code);
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if debug { "debug" } else { "warn" };
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    // Logs go to stderr so they never mix with the command's stdout.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Expand the command line and run it, returning the exit code to report.
async fn run(cli: Cli) -> Result<i32> {
    if cli.command.is_empty() {
        help::print_banner();
        return Ok(0);
    }

    let report = cli.report();
    let raw = cli.raw_command_line();
    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    report.write_arguments(&mut std::io::stdout(), &argv)?;

    let substitutor = Substitutor::new().shell(env::host_shell());
    tracing::debug!(shell = %substitutor.host_shell().program, raw = %raw, "expanding");

    let command = substitutor
        .expand(&raw)
        .await
        .map_err(|e| ExitError::from_subst(&e, &raw))?;

    report.write_expanded(&mut std::io::stdout(), &mut std::io::stderr(), &command)?;
    if report.dry_run {
        return Ok(0);
    }

    let code = substitutor
        .dispatch(&command)
        .await
        .map_err(|e| ExitError::from_subst(&e, &raw))?;
    tracing::debug!(exit_code = code, "command finished");
    Ok(code)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
