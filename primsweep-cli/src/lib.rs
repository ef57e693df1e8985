//! Support library for the primsweep CLI binary.
//!
//! Exposes argument parsing, report rendering, and logging setup so tests can
//! drive a sweep without spawning a subprocess.

pub mod cli;
pub mod logging;
