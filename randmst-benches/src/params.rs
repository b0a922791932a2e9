//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label.

use std::fmt;

use randmst_core::Extraction;

/// Parameters for a Prim's benchmark over a fixed substrate.
#[derive(Clone, Copy, Debug)]
pub struct PrimBenchParams {
    /// Number of points in the graph.
    pub point_count: usize,
    /// Embedding dimension; `0` for uniform weights.
    pub dimension: usize,
    /// Extraction strategy under test.
    pub extraction: Extraction,
}

impl fmt::Display for PrimBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},{}",
            self.point_count,
            self.dimension,
            self.extraction.as_str()
        )
    }
}

/// Parameters for an end-to-end simulation benchmark.
#[derive(Clone, Copy, Debug)]
pub struct SimulationBenchParams {
    /// Number of points per trial.
    pub point_count: usize,
    /// Embedding dimension; `0` for uniform weights.
    pub dimension: usize,
    /// Number of trials per run.
    pub trial_count: usize,
}

impl fmt::Display for SimulationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},t={}",
            self.point_count, self.dimension, self.trial_count
        )
    }
}
