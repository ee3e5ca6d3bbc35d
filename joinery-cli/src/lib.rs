//! Support library for the joinery CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive the commands without spawning a subprocess.

pub mod cli;
pub mod logging;
