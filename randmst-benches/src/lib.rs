//! Benchmark support crate for randmst.
//!
//! Provides seeded synthetic weight substrates and parameter types used by
//! the Criterion benchmarks for dense Prim's and full simulation runs.

pub mod error;
pub mod params;
pub mod source;
