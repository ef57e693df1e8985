//! Strategy builders for spanning tree property tests.

use proptest::prelude::*;

use crate::mst::TieBreak;

/// Largest vertex count generated by the default strategy. The builder is
/// quadratic, so the bound keeps a full suite run short.
pub(super) const MAX_VERTICES: i64 = 400;

/// Builder input for one property case.
#[derive(Clone, Copy, Debug)]
pub(super) struct BuildCase {
    /// Requested vertex count.
    pub vertex_count: i64,
    /// Tie-break policy under test.
    pub tie_break: TieBreak,
}

/// Generates vertex counts biased towards the degenerate sizes.
pub(super) fn vertex_count_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        1 => Just(0_i64),
        1 => Just(1_i64),
        1 => Just(2_i64),
        6 => 3..=MAX_VERTICES,
    ]
}

/// Generates a vertex count together with a tie-break policy.
pub(super) fn build_case_strategy() -> impl Strategy<Value = BuildCase> {
    (vertex_count_strategy(), any::<TieBreak>())
        .prop_map(|(vertex_count, tie_break)| BuildCase {
            vertex_count,
            tie_break,
        })
}
