//! Benchmark support crate for joinery.
//!
//! Provides seeded pair streams and graphs for the Criterion benchmarks that
//! compare the union-find variants and the path engines.

pub mod error;
pub mod params;
pub mod source;
