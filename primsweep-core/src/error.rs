//! Error types for the primsweep core library.
//!
//! Defines the error enums exposed by the builder, the sweep plan, and the
//! benchmark driver, each paired with a stable machine-readable code.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while constructing a uniform-weight spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller supplied a vertex count that cannot describe a vertex set.
    #[error("vertex count must be non-negative (got {vertex_count})")]
    InvalidArgument {
        /// The rejected vertex count.
        vertex_count: i64,
    },
    /// An internal invariant of the frontier expansion was violated.
    #[error(
        "spanning tree invariant violated: {invariant} ({visited} of {vertex_count} vertices visited)"
    )]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Number of vertices visited when the violation was detected.
        visited: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller supplied a negative vertex count.
        InvalidArgument => InvalidArgument { .. } => "MST_INVALID_ARGUMENT",
        /// An internal invariant of the frontier expansion was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

/// Errors raised while assembling a [`crate::SweepPlan`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SweepPlanError {
    /// The stepped range used a zero or negative step.
    #[error("sweep step must be positive (got {step})")]
    NonPositiveStep {
        /// The rejected step.
        step: i64,
    },
    /// The stepped range starts after it stops.
    #[error("sweep range is empty: start {start} exceeds stop {stop}")]
    EmptyRange {
        /// First count of the range.
        start: i64,
        /// Inclusive upper bound of the range.
        stop: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`SweepPlanError`] variants.
    enum SweepPlanErrorCode for SweepPlanError {
        /// The stepped range used a zero or negative step.
        NonPositiveStep => NonPositiveStep { .. } => "SWEEP_NON_POSITIVE_STEP",
        /// The stepped range starts after it stops.
        EmptyRange => EmptyRange { .. } => "SWEEP_EMPTY_RANGE",
    }
}

/// Errors that abort a benchmark sweep.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Building the spanning tree for one vertex count failed.
    #[error("benchmark aborted at vertex count {vertex_count}: {source}")]
    Build {
        /// The vertex count whose construction failed.
        vertex_count: i64,
        /// Underlying builder failure.
        #[source]
        source: MstError,
    },
    /// The measurement sink could not accept a report.
    #[error("failed to report measurement: {source}")]
    Report {
        /// Underlying I/O failure raised by the sink.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`BenchmarkError`] variants.
    enum BenchmarkErrorCode for BenchmarkError {
        /// Building the spanning tree for one vertex count failed.
        Build => Build { .. } => "BENCH_BUILD_FAILED",
        /// The measurement sink could not accept a report.
        Report => Report { .. } => "BENCH_REPORT_FAILED",
    }
}

impl BenchmarkError {
    /// Retrieve the inner [`MstErrorCode`] when the sweep failed inside the builder.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Build { source, .. } => Some(source.code()),
            Self::Report { .. } => None,
        }
    }
}
