//! Strategy builders for Prim's property-based tests.
//!
//! Every fixture is a complete graph on `MIN_NODES..=MAX_NODES` nodes. The
//! matrix is derived from a seeded [`SmallRng`] so shrinking operates on the
//! seed and the distribution rather than on individual weights.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::test_utils::MatrixModel;

use super::types::{MatrixFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs. The cut-minimality check is
/// cubic, so this stays small.
const MAX_NODES: usize = 40;

/// Generates fixtures covering all weight distributions.
pub(super) fn matrix_fixture_strategy() -> impl Strategy<Value = MatrixFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> MatrixFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let model = match distribution {
        WeightDistribution::Unique => unique_weights(node_count, rng),
        WeightDistribution::ManyIdentical => identical_weights(node_count, rng),
        WeightDistribution::Euclidean => euclidean_weights(node_count, rng),
    };
    MatrixFixture {
        node_count,
        model,
        distribution,
    }
}

fn unique_weights(node_count: usize, rng: &mut SmallRng) -> MatrixModel {
    let triangle: Vec<f64> = (0..node_count * (node_count - 1) / 2)
        .map(|_| rng.r#gen::<f64>())
        .collect();
    MatrixModel::complete(node_count, |low, high| {
        triangle[high * (high - 1) / 2 + low]
    })
}

fn identical_weights(node_count: usize, rng: &mut SmallRng) -> MatrixModel {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)) / 10.0)
        .collect();
    let triangle: Vec<f64> = (0..node_count * (node_count - 1) / 2)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();
    MatrixModel::complete(node_count, |low, high| {
        triangle[high * (high - 1) / 2 + low]
    })
}

fn euclidean_weights(node_count: usize, rng: &mut SmallRng) -> MatrixModel {
    let points: Vec<(f64, f64)> = (0..node_count)
        .map(|_| (rng.r#gen::<f64>(), rng.r#gen::<f64>()))
        .collect();
    MatrixModel::complete(node_count, |low, high| {
        let (ax, ay) = points[low];
        let (bx, by) = points[high];
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    })
}
