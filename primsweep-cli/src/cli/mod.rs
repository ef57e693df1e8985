//! Command-line interface for sweeping the uniform-weight spanning tree
//! builder.
//!
//! The `run` command resolves a sweep plan from its flags, streams one timing
//! line per vertex count to the output writer, and optionally appends a table
//! of frontier comparisons against `n²`.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, TieBreakArg, resolve_plan, run_cli,
};
pub use report::{TextReport, format_counts, render_complexity};
