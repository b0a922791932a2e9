//! Aggregate output of a simulation run.

/// Mean MST weight over a run, with the configuration that produced it.
///
/// # Examples
/// ```
/// use randmst_core::SimulationBuilder;
///
/// let result = SimulationBuilder::new()
///     .with_point_count(1)
///     .with_trial_count(4)
///     .with_seed(0)
///     .build()?
///     .run()?;
/// assert_eq!(result.mean_weight(), 0.0);
/// assert_eq!(result.trial_count(), 4);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    point_count: usize,
    trial_count: usize,
    dimension: usize,
    mean_weight: f64,
    min_weight: f64,
    max_weight: f64,
}

impl SimulationResult {
    pub(crate) fn new(
        point_count: usize,
        trial_count: usize,
        dimension: usize,
        summary: TrialSummary,
    ) -> Self {
        Self {
            point_count,
            trial_count,
            dimension,
            mean_weight: summary.mean(trial_count),
            min_weight: summary.min,
            max_weight: summary.max,
        }
    }

    /// Number of points per trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn point_count(&self) -> usize { self.point_count }

    /// Number of trials averaged.
    #[must_use]
    #[rustfmt::skip]
    pub fn trial_count(&self) -> usize { self.trial_count }

    /// Embedding dimension (`0` for the uniform model).
    #[must_use]
    #[rustfmt::skip]
    pub fn dimension(&self) -> usize { self.dimension }

    /// Arithmetic mean of the per-trial MST weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean_weight(&self) -> f64 { self.mean_weight }

    /// Smallest per-trial MST weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_weight(&self) -> f64 { self.min_weight }

    /// Largest per-trial MST weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_weight(&self) -> f64 { self.max_weight }
}

/// Running accumulator over trial weights.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrialSummary {
    total: f64,
    min: f64,
    max: f64,
}

impl Default for TrialSummary {
    fn default() -> Self {
        Self {
            total: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl TrialSummary {
    pub(crate) fn record(&mut self, weight: f64) {
        self.total += weight;
        self.min = self.min.min(weight);
        self.max = self.max.max(weight);
    }

    pub(crate) fn total(&self) -> f64 {
        self.total
    }

    fn mean(&self, trial_count: usize) -> f64 {
        self.total / trial_count as f64
    }
}
