//! Benchmark support crate for primsweep.
//!
//! Provides the parameter types that label Criterion benchmark runs of the
//! uniform-weight spanning tree builder.

pub mod error;
pub mod params;
