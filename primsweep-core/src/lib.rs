//! Primsweep core library.
//!
//! Measures how a frontier-scanning Prim construction scales on uniform-weight
//! complete graphs. [`UniformMstBuilder`] builds and times one spanning tree;
//! [`BenchmarkDriver`] sweeps it across a [`SweepPlan`] and streams each
//! [`Measurement`] to a [`MeasurementSink`].

mod benchmark;
mod error;
mod mst;
mod sweep;
#[cfg(test)]
mod test_utils;

pub use crate::{
    benchmark::{BenchmarkDriver, Measurement, MeasurementSink, SweepReport, run_sweep},
    error::{
        BenchmarkError, BenchmarkErrorCode, MstError, MstErrorCode, SweepPlanError,
        SweepPlanErrorCode,
    },
    mst::{
        Cost, TieBreak, TreeEdge, UNIFORM_WEIGHT, UniformMst, UniformMstBuilder, build_uniform_mst,
    },
    sweep::{STANDARD_LEADING_COUNT, STANDARD_START, STANDARD_STEP, STANDARD_STOP, SweepPlan},
};
