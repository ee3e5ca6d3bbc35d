//! `joinery` binary: loads graph or pair-stream text files and prints
//! connectivity summaries.
//!
//! Summaries go to stdout and diagnostics to stderr. A failed command is
//! logged together with its machine-readable code before the process exits
//! with a non-zero status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use joinery_cli::cli::{Cli, CliError, render_summary, run_cli};
use joinery_cli::logging::{LoggingError, init_logging};
use tracing::{debug, error, field};

fn execute(cli: Cli) -> anyhow::Result<()> {
    let summary = run_cli(cli).context("command failed")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("could not write summary")?;
    stdout.flush().context("could not flush stdout")
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable until logging is installed"
)]
fn main() -> ExitCode {
    match init_logging() {
        Ok(()) => {}
        // Events still reach the subscriber that won the global slot.
        Err(LoggingError::AlreadyInstalled { .. }) => {
            debug!("keeping the existing tracing subscriber");
        }
        Err(err) => {
            eprintln!("joinery: cannot initialise logging: {err}");
            return ExitCode::FAILURE;
        }
    }

    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<CliError>().and_then(CliError::code);
            error!(
                error = format_args!("{err:#}"),
                code = code.map(field::display),
                "joinery command failed"
            );
            ExitCode::FAILURE
        }
    }
}
