use rand::Rng;
use tracing::trace;

use crate::{
    error::Result,
    memory::{checked_product, refill, triangle_len},
};

use super::{CachedUniform, EuclideanCloud, FreshUniform, UniformWeights, WeightModel};

/// Supplies the randomness each trial needs.
///
/// The generator owns the run's RNG and two reusable buffers: the coordinate
/// matrix for `dimension > 0` and the weight triangle for the cached uniform
/// model. [`PointCloudGenerator::reinit`] overwrites the relevant buffer and
/// hands out a [`TrialWeights`] view borrowing it, so nothing from one trial
/// can be observed by the next.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randmst_core::{PointCloudGenerator, UniformWeights, WeightModel};
///
/// let rng = SmallRng::seed_from_u64(7);
/// let mut generator = PointCloudGenerator::new(16, 3, UniformWeights::Fresh, rng);
/// let weights = generator.reinit()?;
/// assert_eq!(weights.node_count(), 16);
/// assert!((weights.upper_bound() - 3.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[derive(Debug)]
pub struct PointCloudGenerator<R> {
    point_count: usize,
    dimension: usize,
    uniform: UniformWeights,
    rng: R,
    coords: Vec<f64>,
    triangle: Vec<f64>,
}

impl<R: Rng> PointCloudGenerator<R> {
    /// Creates a generator for `point_count` points in `dimension`
    /// dimensions. No buffers are allocated until the first `reinit`.
    pub fn new(point_count: usize, dimension: usize, uniform: UniformWeights, rng: R) -> Self {
        Self {
            point_count,
            dimension,
            uniform,
            rng,
            coords: Vec::new(),
            triangle: Vec::new(),
        }
    }

    /// Returns the number of points generated per trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn point_count(&self) -> usize { self.point_count }

    /// Returns the embedding dimension (`0` selects the uniform model).
    #[must_use]
    #[rustfmt::skip]
    pub fn dimension(&self) -> usize { self.dimension }

    /// Draws the substrate for a new trial.
    ///
    /// - `dimension > 0`: fills a `point_count × dimension` matrix with
    ///   independent uniform `[0, 1)` draws.
    /// - `dimension == 0` with [`UniformWeights::Cached`]: fills the weight
    ///   triangle with independent uniform `[0, 1)` draws.
    /// - `dimension == 0` with [`UniformWeights::Fresh`]: allocates nothing;
    ///   weights are drawn when queried.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimulationError::AllocationFailed`] when the buffer
    /// size overflows or cannot be reserved.
    pub fn reinit(&mut self) -> Result<TrialWeights<'_, R>> {
        if self.dimension > 0 {
            let len = checked_product("coordinate matrix", self.point_count, self.dimension)?;
            refill(&mut self.coords, "coordinate matrix", len, 0.0)?;
            fill_uniform(&mut self.rng, &mut self.coords);
            trace!(points = self.point_count, dimension = self.dimension, "drew point cloud");
            return Ok(TrialWeights::Euclidean(EuclideanCloud::from_parts(
                self.dimension,
                &self.coords,
            )));
        }

        match self.uniform {
            UniformWeights::Fresh => Ok(TrialWeights::Fresh(FreshUniform::new(
                self.point_count,
                &mut self.rng,
            ))),
            UniformWeights::Cached => {
                let len = triangle_len("uniform weight triangle", self.point_count)?;
                refill(&mut self.triangle, "uniform weight triangle", len, 0.0)?;
                fill_uniform(&mut self.rng, &mut self.triangle);
                trace!(points = self.point_count, edges = len, "drew uniform weights");
                Ok(TrialWeights::Cached(CachedUniform::from_parts(
                    self.point_count,
                    &self.triangle,
                )))
            }
        }
    }
}

fn fill_uniform<R: Rng>(rng: &mut R, values: &mut [f64]) {
    for value in values {
        *value = rng.r#gen::<f64>();
    }
}

/// Weight model for one trial, borrowing the generator's buffers.
#[derive(Debug)]
pub enum TrialWeights<'a, R> {
    /// Euclidean distances over the trial's point cloud.
    Euclidean(EuclideanCloud<'a>),
    /// Uniform weights drawn on demand.
    Fresh(FreshUniform<'a, R>),
    /// Uniform weights fixed at reinit.
    Cached(CachedUniform<'a>),
}

impl<R: Rng> WeightModel for TrialWeights<'_, R> {
    fn node_count(&self) -> usize {
        match self {
            Self::Euclidean(model) => model.node_count(),
            Self::Fresh(model) => model.node_count(),
            Self::Cached(model) => model.node_count(),
        }
    }

    fn upper_bound(&self) -> f64 {
        match self {
            Self::Euclidean(model) => model.upper_bound(),
            Self::Fresh(model) => model.upper_bound(),
            Self::Cached(model) => model.upper_bound(),
        }
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        match self {
            Self::Euclidean(model) => model.weight(v, w),
            Self::Fresh(model) => model.weight(v, w),
            Self::Cached(model) => model.weight(v, w),
        }
    }
}
