use primsweep_core::{
    BenchmarkError, BenchmarkErrorCode, MstError, MstErrorCode, SweepPlanError, SweepPlanErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(MstError::InvalidArgument { vertex_count: -1 }, MstErrorCode::InvalidArgument)]
#[case(
    MstError::InvariantViolation { invariant: "frontier exhausted early", visited: 3, vertex_count: 5 },
    MstErrorCode::InvariantViolation
)]
fn returns_expected_mst_code(#[case] error: MstError, #[case] expected: MstErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case(SweepPlanError::NonPositiveStep { step: 0 }, "SWEEP_NON_POSITIVE_STEP")]
#[case(SweepPlanError::EmptyRange { start: 2, stop: 1 }, "SWEEP_EMPTY_RANGE")]
fn returns_expected_sweep_code(#[case] error: SweepPlanError, #[case] expected: &str) {
    assert_eq!(error.code().as_str(), expected);
    assert!(matches!(
        error.code(),
        SweepPlanErrorCode::NonPositiveStep | SweepPlanErrorCode::EmptyRange
    ));
}

#[test]
fn build_failures_expose_the_inner_code() {
    let error = BenchmarkError::Build {
        vertex_count: -4,
        source: MstError::InvalidArgument { vertex_count: -4 },
    };
    assert_eq!(error.code(), BenchmarkErrorCode::Build);
    assert_eq!(error.mst_code(), Some(MstErrorCode::InvalidArgument));
    assert_eq!(
        error.to_string(),
        "benchmark aborted at vertex count -4: vertex count must be non-negative (got -4)"
    );
}

#[test]
fn report_failures_have_no_inner_code() {
    let error = BenchmarkError::Report {
        source: std::io::Error::other("closed"),
    };
    assert_eq!(error.code().as_str(), "BENCH_REPORT_FAILED");
    assert_eq!(error.mst_code(), None);
}
