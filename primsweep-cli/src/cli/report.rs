//! Plain-text rendering of sweep progress.

use std::io::{self, Write};

use primsweep_core::{Measurement, MeasurementSink, SweepReport};

/// Writes the echo line and one timing line per measurement.
///
/// Each line is flushed as soon as it is written so long sweeps show progress
/// even behind a buffered writer.
#[derive(Debug)]
pub struct TextReport<W> {
    writer: W,
}

impl<W: Write> TextReport<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeasurementSink for TextReport<W> {
    fn begin(&mut self, counts: &[i64]) -> io::Result<()> {
        writeln!(self.writer, "{}", format_counts(counts))?;
        self.writer.flush()
    }

    fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        writeln!(
            self.writer,
            "Execution time for uniform weight with {} nodes: {:.6} seconds",
            measurement.vertex_count(),
            measurement.elapsed_seconds(),
        )?;
        self.writer.flush()
    }
}

/// Formats counts as a bracketed, comma-separated list.
///
/// # Examples
/// ```
/// use primsweep_cli::cli::format_counts;
///
/// assert_eq!(format_counts(&[2, 500, 1000]), "[2, 500, 1000]");
/// assert_eq!(format_counts(&[]), "[]");
/// ```
#[must_use]
pub fn format_counts(counts: &[i64]) -> String {
    let joined = counts
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Writes a tab-separated table of comparisons against `n²`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_complexity(report: &SweepReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "nodes\tcomparisons\tn^2")?;
    for measurement in report.measurements() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            measurement.vertex_count(),
            measurement.comparisons(),
            measurement.quadratic_reference(),
        )?;
    }
    writer.flush()
}
