//! Seeded synthetic weight substrates for benchmarking.
//!
//! Benchmarks time Prim's over a fixed substrate, so generation happens once
//! during setup rather than inside the measured loop.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use randmst_core::{CachedUniform, EuclideanCloud};

use crate::error::BenchSetupError;

/// Configuration for a synthetic substrate.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of points (graph nodes) to generate.
    pub point_count: usize,
    /// Embedding dimension; `0` generates a uniform weight triangle.
    pub dimension: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Pre-generated randomness for one benchmark graph.
///
/// Holds either a row-major coordinate matrix (`dimension > 0`) or the
/// strict upper weight triangle (`dimension == 0`).
#[derive(Clone, Debug)]
pub struct SyntheticSubstrate {
    point_count: usize,
    dimension: usize,
    values: Vec<f64>,
}

impl SyntheticSubstrate {
    /// Draws a substrate from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `point_count` is zero.
    ///
    /// # Examples
    /// ```
    /// use randmst_benches::source::{SyntheticConfig, SyntheticSubstrate};
    ///
    /// let substrate = SyntheticSubstrate::generate(&SyntheticConfig {
    ///     point_count: 4,
    ///     dimension: 0,
    ///     seed: 1,
    /// })?;
    /// assert_eq!(substrate.values().len(), 6);
    /// # Ok::<(), randmst_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &SyntheticConfig) -> Result<Self, BenchSetupError> {
        if config.point_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "point_count",
            });
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let values = if config.dimension > 0 {
            let len = config.point_count.saturating_mul(config.dimension);
            (0..len).map(|_| rng.r#gen::<f64>()).collect()
        } else {
            (1..config.point_count)
                .flat_map(|high| 0..high)
                .map(|_| rng.r#gen::<f64>())
                .collect()
        };
        Ok(Self {
            point_count: config.point_count,
            dimension: config.dimension,
            values,
        })
    }

    /// Number of points (graph nodes).
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    /// Embedding dimension; `0` for the uniform triangle.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Raw generated values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Borrows the coordinates as a Euclidean cloud.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ShapeMismatch`] when the substrate holds a
    /// weight triangle instead of coordinates.
    pub fn euclidean(&self) -> Result<EuclideanCloud<'_>, BenchSetupError> {
        EuclideanCloud::new(self.dimension, &self.values).ok_or(BenchSetupError::ShapeMismatch {
            what: "coordinate matrix",
            point_count: self.point_count,
        })
    }

    /// Borrows the weight triangle as a cached uniform model.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ShapeMismatch`] when the substrate holds
    /// coordinates instead of a weight triangle.
    pub fn cached_uniform(&self) -> Result<CachedUniform<'_>, BenchSetupError> {
        if self.dimension > 0 {
            return Err(BenchSetupError::ShapeMismatch {
                what: "weight triangle",
                point_count: self.point_count,
            });
        }
        CachedUniform::new(self.point_count, &self.values).ok_or(BenchSetupError::ShapeMismatch {
            what: "weight triangle",
            point_count: self.point_count,
        })
    }
}
