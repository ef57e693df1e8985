//! Benchmark driver sweeping the uniform-weight builder over vertex counts.
//!
//! The driver measures each count exactly once, strictly in order, and hands
//! every measurement to a [`MeasurementSink`] as soon as it is taken so long
//! sweeps report progress incrementally. The first failure aborts the sweep;
//! measurements already reported stay reported.

use std::io;
use std::time::Duration;

use tracing::{Span, field, info, instrument};

use crate::error::BenchmarkError;
use crate::mst::{TieBreak, UniformMst, UniformMstBuilder};

/// Receives the progress of a benchmark sweep.
pub trait MeasurementSink {
    /// Called once with the full count sequence before any measurement.
    ///
    /// # Errors
    /// Returns an I/O error when the sink cannot accept the announcement.
    fn begin(&mut self, counts: &[i64]) -> io::Result<()>;

    /// Called once per count, in sweep order.
    ///
    /// # Errors
    /// Returns an I/O error when the sink cannot accept the measurement.
    fn record(&mut self, measurement: &Measurement) -> io::Result<()>;
}

impl MeasurementSink for Vec<Measurement> {
    fn begin(&mut self, _counts: &[i64]) -> io::Result<()> {
        Ok(())
    }

    fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        self.push(*measurement);
        Ok(())
    }
}

impl<S: MeasurementSink + ?Sized> MeasurementSink for &mut S {
    fn begin(&mut self, counts: &[i64]) -> io::Result<()> {
        (**self).begin(counts)
    }

    fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        (**self).record(measurement)
    }
}

/// The timing and size of one builder invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    vertex_count: usize,
    edge_count: usize,
    comparisons: usize,
    tie_break: TieBreak,
    elapsed: Duration,
}

impl Measurement {
    /// Summarises a completed construction.
    #[must_use]
    pub const fn from_tree(tree: &UniformMst) -> Self {
        Self {
            vertex_count: tree.vertex_count(),
            edge_count: tree.edge_count(),
            comparisons: tree.comparisons(),
            tie_break: tree.tie_break(),
            elapsed: tree.elapsed(),
        }
    }

    /// Returns the measured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of tree edges produced.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the number of frontier entries the scans inspected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn comparisons(&self) -> usize { self.comparisons }

    /// Returns the tie-break policy used.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the construction time.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the construction time in seconds.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Returns `n²` for the measured vertex count, the reference curve the
    /// comparison count is plotted against.
    #[must_use]
    pub fn quadratic_reference(&self) -> u128 {
        let n = u128::from(u64::try_from(self.vertex_count).unwrap_or(u64::MAX));
        n.saturating_mul(n)
    }
}

/// Every measurement of a completed sweep, in sweep order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    measurements: Vec<Measurement>,
}

impl SweepReport {
    /// Returns the measurements in sweep order.
    #[must_use]
    pub const fn measurements(&self) -> &[Measurement] {
        self.measurements.as_slice()
    }

    /// Returns the number of measurements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Returns `true` when the sweep measured nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Returns the total construction time across the sweep.
    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        self.measurements
            .iter()
            .map(Measurement::elapsed)
            .sum()
    }
}

/// Runs the uniform-weight builder once per vertex count.
///
/// # Examples
/// ```
/// use primsweep_core::{BenchmarkDriver, Measurement, UniformMstBuilder};
///
/// let driver = BenchmarkDriver::new(UniformMstBuilder::new());
/// let mut recorded: Vec<Measurement> = Vec::new();
/// let report = driver.run(&[2, 50], &mut recorded).expect("sweep succeeds");
/// assert_eq!(report.len(), 2);
/// assert_eq!(recorded[1].vertex_count(), 50);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkDriver {
    builder: UniformMstBuilder,
}

impl BenchmarkDriver {
    /// Creates a driver measuring constructions configured by `builder`.
    #[must_use]
    pub const fn new(builder: UniformMstBuilder) -> Self {
        Self { builder }
    }

    /// Returns the builder configuration used for each measurement.
    #[must_use]
    #[rustfmt::skip]
    pub const fn builder(&self) -> UniformMstBuilder { self.builder }

    /// Measures every count in order, reporting each one to `sink`.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::Build`] for the first count the builder
    /// rejects and [`BenchmarkError::Report`] when the sink fails. Counts
    /// after the failing one are not measured.
    #[instrument(
        name = "bench.run",
        err,
        skip(self, counts, sink),
        fields(
            counts = counts.len(),
            tie_break = %self.builder.tie_break(),
            measured = field::Empty,
        ),
    )]
    pub fn run<S: MeasurementSink>(
        &self,
        counts: &[i64],
        mut sink: S,
    ) -> Result<SweepReport, BenchmarkError> {
        sink.begin(counts)
            .map_err(|source| BenchmarkError::Report { source })?;

        let mut measurements = Vec::with_capacity(counts.len());
        for &vertex_count in counts {
            let measurement = self
                .builder
                .build(vertex_count)
                .map(|tree| Measurement::from_tree(&tree))
                .map_err(|source| BenchmarkError::Build {
                    vertex_count,
                    source,
                })?;

            info!(
                vertex_count = measurement.vertex_count(),
                edges = measurement.edge_count(),
                comparisons = measurement.comparisons(),
                elapsed_seconds = measurement.elapsed_seconds(),
                "measured uniform spanning tree"
            );
            sink.record(&measurement)
                .map_err(|source| BenchmarkError::Report { source })?;
            measurements.push(measurement);
        }

        Span::current().record("measured", measurements.len());
        Ok(SweepReport { measurements })
    }
}

/// Sweeps `counts` with the default builder configuration.
///
/// # Errors
/// See [`BenchmarkDriver::run`].
pub fn run_sweep<S: MeasurementSink>(
    counts: &[i64],
    sink: S,
) -> Result<SweepReport, BenchmarkError> {
    BenchmarkDriver::default().run(counts, sink)
}
