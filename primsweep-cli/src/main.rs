//! CLI entry point for the primsweep benchmark.
//!
//! Parses arguments with clap, streams the sweep report to stdout, and maps
//! failures to a logged error code and a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use primsweep_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_cli(cli, &mut writer).context("failed to execute command")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, mst_code) = err
            .downcast_ref::<CliError>()
            .map(|cli_error| match cli_error {
                CliError::Plan(plan) => (Some(plan.code().as_str()), None),
                CliError::Benchmark(bench) => (
                    Some(bench.code().as_str()),
                    bench.mst_code().map(|code| code.as_str()),
                ),
                CliError::Render { .. } => (None, None),
            })
            .unwrap_or((None, None));

        error!(
            error = %format!("{err:#}"),
            code = code.map(field::display),
            mst_code = mst_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
