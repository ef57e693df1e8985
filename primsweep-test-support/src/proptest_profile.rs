//! Environment-driven tuning for property-test suites.
//!
//! Every suite reads the same two variables so CI can raise the case count
//! or isolate cases in subprocesses without touching test code.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked case execution.
pub const PRIMSWEEP_PBT_FORK_ENV_KEY: &str = "PRIMSWEEP_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the supplied defaults when a
    /// variable is unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use primsweep_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(PRIMSWEEP_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|cases| *cases > 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Restores a variable to its previous value on drop.
    struct EnvGuard {
        key: &'static str,
        original: Option<String>,
    }

    impl EnvGuard {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let original = env::var(key).ok();
            apply(key, value);
            Self { key, original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            apply(self.key, self.original.as_deref());
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        // SAFETY: tests serialize environment access with ENV_LOCK.
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }

    fn load_with(cases: Option<&str>, fork: Option<&str>, default_fork: bool) -> ProptestRunProfile {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _cases = EnvGuard::new(PROPTEST_CASES_ENV_KEY, cases);
        let _fork = EnvGuard::new(PRIMSWEEP_PBT_FORK_ENV_KEY, fork);
        ProptestRunProfile::load(64, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = load_with(None, None, false);
        assert_eq!(profile, ProptestRunProfile { cases: 64, fork: false });
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 256 ", 256)]
    #[case("0", 64)]
    #[case("-3", 64)]
    #[case("many", 64)]
    fn case_overrides(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(load_with(Some(raw), None, false).cases(), expected);
    }

    #[rstest]
    #[case("true", true)]
    #[case("ON", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("0", false)]
    fn fork_overrides(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(load_with(None, Some(raw), !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    fn malformed_fork_keeps_default(#[case] raw: &str) {
        assert!(load_with(None, Some(raw), true).fork());
    }
}
