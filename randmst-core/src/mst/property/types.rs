//! Type definitions for Prim's property-based tests.

use test_strategy::Arbitrary;

use crate::test_utils::MatrixModel;

/// Weight distribution used to fill the generated complete graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every pair has an independent uniform `[0, 1)` weight.
    #[weight(2)]
    Unique,
    /// Weights come from a pool of one to three values, stressing tie-breaks
    /// and the sentinel-equality path.
    #[weight(3)]
    ManyIdentical,
    /// Weights are L2 distances between random points in the unit square.
    #[weight(2)]
    Euclidean,
}

/// Fixture for Prim's property tests.
///
/// Captures the generated matrix alongside the distribution so failures
/// carry enough context to reproduce.
#[derive(Clone, Debug)]
pub(super) struct MatrixFixture {
    /// Number of nodes in the complete graph.
    pub node_count: usize,
    /// Symmetric weight matrix.
    pub model: MatrixModel,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
