//! Shared test utilities used across primsweep crates.

pub mod proptest_profile;
pub mod tracing;
