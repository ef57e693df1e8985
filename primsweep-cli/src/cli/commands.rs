//! Command implementations and argument parsing for the primsweep CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use primsweep_core::{
    BenchmarkDriver, BenchmarkError, STANDARD_LEADING_COUNT, STANDARD_START, STANDARD_STEP,
    STANDARD_STOP, SweepPlan, SweepPlanError, SweepReport, TieBreak, UniformMstBuilder,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::{TextReport, render_complexity};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "primsweep",
    about = "Time Prim's algorithm on uniform-weight complete graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sweep the builder over a sequence of vertex counts.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
///
/// Without flags the standard plan `[2, 500, 1000, …, 20000]` is measured.
/// Any of `--leading`, `--start`, `--stop` or `--step` replaces the matching
/// part of the standard plan.
#[derive(Debug, Args, Clone, Default)]
pub struct RunCommand {
    /// Explicit comma-separated vertex counts, measured in the given order.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["leading", "start", "stop", "step"],
    )]
    pub counts: Option<Vec<i64>>,

    /// Counts measured before the stepped range (default `2`).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub leading: Option<Vec<i64>>,

    /// First count of the stepped range.
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Inclusive upper bound of the stepped range.
    #[arg(long, allow_negative_numbers = true)]
    pub stop: Option<i64>,

    /// Increment of the stepped range.
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// How ties between equal-cost frontier vertices are resolved.
    #[arg(long = "tie-break", value_enum, default_value_t = TieBreakArg::Unordered)]
    pub tie_break: TieBreakArg,

    /// Append a table of frontier comparisons against `n²`.
    #[arg(long)]
    pub complexity: bool,
}

/// Tie-break policies selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Hash-ordered containers; tree shape varies between runs.
    #[default]
    Unordered,
    /// Ordered containers; ties resolve to the lowest vertex id.
    LowestId,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Unordered => Self::Unordered,
            TieBreakArg::LowestId => Self::LowestId,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The stepped plan flags did not describe a valid range.
    #[error(transparent)]
    Plan(#[from] SweepPlanError),
    /// The sweep aborted.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
    /// Writing the complexity table failed.
    #[error("failed to render complexity table: {source}")]
    Render {
        /// Underlying writer failure.
        #[source]
        source: io::Error,
    },
}

/// Summarises a completed `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The counts that were measured.
    pub plan: SweepPlan,
    /// Tie-break policy the builder used.
    pub tie_break: TieBreak,
    /// Every measurement, in sweep order.
    pub report: SweepReport,
}

/// Executes the CLI command represented by `cli`, streaming the report to
/// `out`.
///
/// # Errors
/// Returns [`CliError`] when the plan is invalid, a count is rejected, or the
/// output cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use primsweep_cli::cli::{Cli, Command, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         counts: Some(vec![2, 50]),
///         ..RunCommand::default()
///     }),
/// };
/// let mut out = Vec::new();
/// let summary = run_cli(cli, &mut out)?;
/// assert_eq!(summary.report.len(), 2);
/// assert!(String::from_utf8(out)?.starts_with("[2, 50]\n"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, out),
    fields(command = field::Empty),
)]
pub fn run_cli<W: Write>(cli: Cli, out: W) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, out)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, out),
    fields(counts = field::Empty, tie_break = field::Empty, complexity = command.complexity),
)]
pub(super) fn run_command<W: Write>(
    command: RunCommand,
    mut out: W,
) -> Result<ExecutionSummary, CliError> {
    let plan = resolve_plan(&command)?;
    let tie_break = TieBreak::from(command.tie_break);

    let span = Span::current();
    span.record("counts", plan.len());
    span.record("tie_break", field::display(tie_break));

    let driver = BenchmarkDriver::new(UniformMstBuilder::new().with_tie_break(tie_break));
    let report = driver.run(plan.counts(), TextReport::new(&mut out))?;

    if command.complexity {
        render_complexity(&report, &mut out).map_err(|source| CliError::Render { source })?;
    }

    info!(
        measured = report.len(),
        total_seconds = report.total_elapsed().as_secs_f64(),
        "sweep completed"
    );
    Ok(ExecutionSummary {
        plan,
        tie_break,
        report,
    })
}

/// Turns the plan flags of `command` into a [`SweepPlan`].
///
/// Explicit `--counts` win. Otherwise each stepped-range flag falls back to
/// the standard plan's value, so no flags at all yields
/// [`SweepPlan::standard`].
///
/// # Errors
/// Returns [`CliError::Plan`] when the stepped range is invalid.
pub fn resolve_plan(command: &RunCommand) -> Result<SweepPlan, CliError> {
    if let Some(counts) = &command.counts {
        return Ok(SweepPlan::from_counts(counts.clone()));
    }

    let stepped_overridden = command.leading.is_some()
        || command.start.is_some()
        || command.stop.is_some()
        || command.step.is_some();
    if !stepped_overridden {
        return Ok(SweepPlan::standard());
    }

    let leading = command
        .leading
        .as_deref()
        .unwrap_or(&[STANDARD_LEADING_COUNT]);
    let plan = SweepPlan::stepped(
        leading,
        command.start.unwrap_or(STANDARD_START),
        command.stop.unwrap_or(STANDARD_STOP),
        command.step.unwrap_or(STANDARD_STEP),
    )?;
    Ok(plan)
}
