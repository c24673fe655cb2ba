//! `randgraph` binary.
//!
//! Builds one random graph from the command-line bounds, places it on a
//! circle, and writes the vertex and edge listing to stdout. Diagnostics go
//! to stderr through `tracing`; any failure exits non-zero.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use randgraph_cli::{
    cli::{Cli, CliError, ExecutionSummary, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        warn_without_tracing(&err);
        return ExitCode::FAILURE;
    }

    match generate_listing(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<CliError>()
                .map(|failure| field::display(failure.code()));
            error!(error = %err, code, "randgraph failed");
            ExitCode::FAILURE
        }
    }
}

fn generate_listing(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("graph generation failed")?;
    write_listing(&summary).context("could not write listing to stdout")
}

fn write_listing(summary: &ExecutionSummary) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(summary, &mut out)?;
    out.flush()
}

#[expect(
    clippy::print_stderr,
    reason = "No subscriber is installed when logging setup fails"
)]
fn warn_without_tracing(err: &LoggingError) {
    eprintln!("randgraph: logging unavailable: {err}");
}
