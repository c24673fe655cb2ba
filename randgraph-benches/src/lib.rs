//! Benchmark support crate for randgraph.
//!
//! Provides the parameter grid shared by the Criterion benchmarks for random
//! generation and layout.

pub mod params;
