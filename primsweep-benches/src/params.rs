//! Benchmark parameter types.

use std::fmt;

use primsweep_core::TieBreak;

/// Parameters for a single-construction benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct UniformBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: i64,
    /// Frontier tie-break policy.
    pub tie_break: TieBreak,
}

impl fmt::Display for UniformBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},tie={}", self.vertex_count, self.tie_break)
    }
}

/// Parameters for a whole-sweep benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SweepBenchParams {
    /// Largest vertex count in the sweep.
    pub stop: i64,
    /// Increment between consecutive counts.
    pub step: i64,
}

impl fmt::Display for SweepBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop={},step={}", self.stop, self.step)
    }
}
