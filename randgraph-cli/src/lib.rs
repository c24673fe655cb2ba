//! Support library for the randgraph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can exercise them without forking a subprocess.

pub mod cli;
pub mod logging;
