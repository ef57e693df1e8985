//! Errors raised while preparing benchmark inputs.

use primsweep_core::{BenchmarkError, MstError, SweepPlanError};
use thiserror::Error;

/// Failure encountered before a benchmark starts timing.
#[derive(Debug, Error)]
pub enum BenchSetupError {
    /// The sweep plan parameters were invalid.
    #[error(transparent)]
    Plan(#[from] SweepPlanError),
    /// A warm-up construction was rejected.
    #[error(transparent)]
    Build(#[from] MstError),
    /// A warm-up sweep failed.
    #[error(transparent)]
    Sweep(#[from] BenchmarkError),
}
