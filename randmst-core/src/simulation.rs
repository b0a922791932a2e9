//! Monte Carlo driver that averages MST weight over independent trials.
//!
//! A run owns one RNG stream, one [`PointCloudGenerator`] and one
//! [`MstBuilder`]. Each trial redraws the substrate from the stream, rebuilds
//! the tree over it, and feeds the weight into a running summary. Nothing
//! else survives from one trial to the next.

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{
    Result,
    builder::SimulationBuilder,
    memory::estimate_trial_bytes,
    mst::{Extraction, MstBuilder},
    result::{SimulationResult, TrialSummary},
    weight::{PointCloudGenerator, UniformWeights},
};

/// Validated simulation configuration, ready to run.
///
/// Construct one with [`SimulationBuilder`].
///
/// # Examples
/// ```
/// use randmst_core::SimulationBuilder;
///
/// let simulation = SimulationBuilder::new()
///     .with_point_count(4)
///     .with_trial_count(2)
///     .with_dimension(2)
///     .with_seed(3)
///     .build()?;
/// let result = simulation.run()?;
/// assert!(result.mean_weight() > 0.0);
/// assert!(result.min_weight() <= result.max_weight());
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    point_count: usize,
    trial_count: NonZeroUsize,
    dimension: usize,
    seed: Option<u64>,
    extraction: Extraction,
    uniform: UniformWeights,
}

impl Simulation {
    pub(crate) fn new(
        point_count: usize,
        trial_count: NonZeroUsize,
        dimension: usize,
        seed: Option<u64>,
        extraction: Extraction,
        uniform: UniformWeights,
    ) -> Self {
        Self {
            point_count,
            trial_count,
            dimension,
            seed,
            extraction,
            uniform,
        }
    }

    /// Number of points generated per trial.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Number of trials averaged into the estimate.
    #[must_use]
    pub fn trial_count(&self) -> NonZeroUsize {
        self.trial_count
    }

    /// Embedding dimension (`0` selects the uniform weight model).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Seed for the run's RNG, or `None` for entropy seeding.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Prim's extraction strategy.
    #[must_use]
    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Uniform weight mode used when the dimension is zero.
    #[must_use]
    pub fn uniform_weights(&self) -> UniformWeights {
        self.uniform
    }

    /// Estimated bytes held live during one trial.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::SimulationBuilder;
    ///
    /// let simulation = SimulationBuilder::new().with_point_count(0).build()?;
    /// assert_eq!(simulation.estimated_trial_bytes(), 0);
    /// # Ok::<(), randmst_core::SimulationError>(())
    /// ```
    #[must_use]
    pub fn estimated_trial_bytes(&self) -> u64 {
        estimate_trial_bytes(self.point_count, self.dimension, self.uniform, self.extraction)
    }

    /// Runs every trial and returns the aggregate result.
    ///
    /// The RNG is seeded from the configured seed, or from OS entropy when no
    /// seed was set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimulationError::AllocationFailed`] when a per-trial
    /// buffer cannot be allocated.
    pub fn run(&self) -> Result<SimulationResult> {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.run_trials(rng)
    }

    /// Runs every trial drawing from the supplied RNG, ignoring the
    /// configured seed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimulationError::AllocationFailed`] when a per-trial
    /// buffer cannot be allocated.
    pub fn run_with_rng<R: Rng>(&self, rng: R) -> Result<SimulationResult> {
        self.run_trials(rng)
    }

    #[instrument(
        name = "core.simulation",
        err,
        skip(self, rng),
        fields(
            points = self.point_count,
            trials = self.trial_count.get(),
            dimension = self.dimension,
            extraction = self.extraction.as_str(),
            uniform = self.uniform.as_str(),
            estimated_bytes = self.estimated_trial_bytes(),
        ),
    )]
    fn run_trials<R: Rng>(&self, rng: R) -> Result<SimulationResult> {
        let mut generator =
            PointCloudGenerator::new(self.point_count, self.dimension, self.uniform, rng);
        let mut builder = MstBuilder::new(self.extraction);
        let mut summary = TrialSummary::default();

        for trial in 0..self.trial_count.get() {
            let mut weights = generator.reinit()?;
            let weight = builder.build(&mut weights)?;
            debug!(trial, weight, "trial completed");
            summary.record(weight);
        }

        let result = SimulationResult::new(
            self.point_count,
            self.trial_count.get(),
            self.dimension,
            summary,
        );
        info!(
            mean = result.mean_weight(),
            total = summary.total(),
            min = result.min_weight(),
            max = result.max_weight(),
            "simulation completed"
        );
        Ok(result)
    }
}

/// Estimates the mean MST weight for `numpoints` random points in
/// `dimension` dimensions over `numtrials` trials.
///
/// `dimension == 0` selects independent uniform edge weights. The RNG is
/// seeded from OS entropy, so repeated calls give different estimates; use
/// [`SimulationBuilder::with_seed`] for reproducible runs.
///
/// # Errors
///
/// Returns [`crate::SimulationError::InvalidPointCount`],
/// [`crate::SimulationError::InvalidTrialCount`] or
/// [`crate::SimulationError::InvalidDimension`] for out-of-range arguments,
/// and [`crate::SimulationError::AllocationFailed`] when a trial's buffers
/// cannot be allocated.
///
/// # Examples
/// ```
/// use randmst_core::{SimulationErrorCode, run_simulation};
///
/// assert_eq!(run_simulation(1, 5, 3)?, 0.0);
///
/// let err = run_simulation(10, 1, -1).expect_err("negative dimension");
/// assert_eq!(err.code(), SimulationErrorCode::InvalidDimension);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
pub fn run_simulation(numpoints: i64, numtrials: i64, dimension: i64) -> Result<f64> {
    SimulationBuilder::new()
        .with_point_count(numpoints)
        .with_trial_count(numtrials)
        .with_dimension(dimension)
        .build()?
        .run()
        .map(|result| result.mean_weight())
}
