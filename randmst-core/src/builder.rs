//! Builder utilities for configuring a [`Simulation`].
//!
//! Counts are accepted as signed integers so that negative values supplied by
//! callers (typically straight from a command line) are rejected with a typed
//! error instead of wrapping.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::SimulationError,
    mst::Extraction,
    simulation::Simulation,
    weight::UniformWeights,
};

/// Configures and constructs [`Simulation`] instances.
///
/// # Examples
/// ```
/// use randmst_core::{Extraction, SimulationBuilder, UniformWeights};
///
/// let simulation = SimulationBuilder::new()
///     .with_point_count(64)
///     .with_trial_count(3)
///     .with_dimension(0)
///     .with_seed(11)
///     .with_extraction(Extraction::BinaryHeap)
///     .with_uniform_weights(UniformWeights::Cached)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(simulation.point_count(), 64);
/// assert_eq!(simulation.trial_count().get(), 3);
/// assert_eq!(simulation.extraction(), Extraction::BinaryHeap);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    point_count: i64,
    trial_count: i64,
    dimension: i64,
    seed: Option<u64>,
    extraction: Extraction,
    uniform: UniformWeights,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            point_count: 128,
            trial_count: 1,
            dimension: 2,
            seed: None,
            extraction: Extraction::LinearScan,
            uniform: UniformWeights::Fresh,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters: 128 points, one
    /// trial, two dimensions, entropy seeding.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::{Extraction, SimulationBuilder};
    ///
    /// let builder = SimulationBuilder::new();
    /// assert_eq!(builder.point_count(), 128);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.extraction(), Extraction::LinearScan);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of points per trial.
    #[must_use]
    pub fn with_point_count(mut self, point_count: i64) -> Self {
        self.point_count = point_count;
        self
    }

    /// Returns the configured point count.
    #[must_use]
    pub fn point_count(&self) -> i64 {
        self.point_count
    }

    /// Overrides the number of trials averaged into the estimate.
    #[must_use]
    pub fn with_trial_count(mut self, trial_count: i64) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// Returns the configured trial count.
    #[must_use]
    pub fn trial_count(&self) -> i64 {
        self.trial_count
    }

    /// Overrides the embedding dimension. `0` selects the uniform weight
    /// model.
    #[must_use]
    pub fn with_dimension(mut self, dimension: i64) -> Self {
        self.dimension = dimension;
        self
    }

    /// Returns the configured dimension.
    #[must_use]
    pub fn dimension(&self) -> i64 {
        self.dimension
    }

    /// Fixes the RNG seed, making the run reproducible.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::SimulationBuilder;
    ///
    /// let builder = SimulationBuilder::new().with_seed(42);
    /// assert_eq!(builder.seed(), Some(42));
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Selects the Prim's extraction strategy.
    #[must_use]
    pub fn with_extraction(mut self, extraction: Extraction) -> Self {
        self.extraction = extraction;
        self
    }

    /// Returns the configured extraction strategy.
    #[must_use]
    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Selects how uniform weights are produced when the dimension is zero.
    #[must_use]
    pub fn with_uniform_weights(mut self, uniform: UniformWeights) -> Self {
        self.uniform = uniform;
        self
    }

    /// Returns the configured uniform weight mode.
    #[must_use]
    pub fn uniform_weights(&self) -> UniformWeights {
        self.uniform
    }

    /// Validates the configuration and constructs a [`Simulation`].
    ///
    /// No buffers are allocated here; validation always precedes allocation.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidPointCount`] when the point count is
    ///   negative.
    /// - [`SimulationError::InvalidTrialCount`] when the trial count is below
    ///   one.
    /// - [`SimulationError::InvalidDimension`] when the dimension is negative.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::{SimulationBuilder, SimulationErrorCode};
    ///
    /// let err = SimulationBuilder::new()
    ///     .with_trial_count(0)
    ///     .build()
    ///     .expect_err("zero trials leaves the mean undefined");
    /// assert_eq!(err.code(), SimulationErrorCode::InvalidTrialCount);
    /// ```
    pub fn build(self) -> Result<Simulation> {
        let point_count = usize::try_from(self.point_count).map_err(|_| {
            SimulationError::InvalidPointCount {
                got: self.point_count,
            }
        })?;
        let trial_count = usize::try_from(self.trial_count)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(SimulationError::InvalidTrialCount {
                got: self.trial_count,
            })?;
        let dimension = usize::try_from(self.dimension).map_err(|_| {
            SimulationError::InvalidDimension {
                got: self.dimension,
            }
        })?;

        Ok(Simulation::new(
            point_count,
            trial_count,
            dimension,
            self.seed,
            self.extraction,
            self.uniform,
        ))
    }
}
