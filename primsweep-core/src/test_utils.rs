//! Shared test utilities for `primsweep-core`.

use primsweep_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared run profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `PRIMSWEEP_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
