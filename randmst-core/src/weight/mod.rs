//! Edge-weight models for the implicit complete graph of one trial.
//!
//! A trial's graph is never materialised as an edge list. Instead the MST
//! builder queries a [`WeightModel`] for the weight between two node indices.
//! Two models ship with the crate:
//!
//! - [`EuclideanCloud`]: points drawn uniformly from `[0, 1)^d`, weighted by
//!   their L2 distance.
//! - The uniform model for `dimension == 0`, where every edge weight is an
//!   independent uniform `[0, 1)` draw. [`UniformWeights`] selects whether
//!   those draws are made on demand ([`FreshUniform`]) or fixed once per trial
//!   ([`CachedUniform`]).
//!
//! [`PointCloudGenerator`] owns the run's random number generator and
//! produces a fresh [`TrialWeights`] substrate at the start of every trial.

mod euclidean;
mod generator;
mod uniform;

pub use self::euclidean::EuclideanCloud;
pub use self::generator::{PointCloudGenerator, TrialWeights};
pub use self::uniform::{CachedUniform, FreshUniform};

/// Weighted view over the complete graph on `node_count()` nodes.
///
/// Implementations must return non-negative weights no greater than
/// [`WeightModel::upper_bound`]. The builder never asks for `weight(v, v)`.
///
/// # Examples
/// ```
/// use randmst_core::WeightModel;
///
/// struct Path(Vec<f64>);
///
/// impl WeightModel for Path {
///     fn node_count(&self) -> usize { self.0.len() }
///     fn upper_bound(&self) -> f64 { 100.0 }
///     fn weight(&mut self, v: usize, w: usize) -> f64 { (self.0[v] - self.0[w]).abs() }
/// }
///
/// let mut path = Path(vec![0.0, 2.0, 5.0]);
/// assert_eq!(path.weight(0, 2), 5.0);
/// ```
pub trait WeightModel {
    /// Number of nodes in the implicit complete graph.
    fn node_count(&self) -> usize;

    /// Largest weight any edge can take.
    ///
    /// Used as the frontier's "not yet observed" sentinel: `√dimension` for
    /// Euclidean clouds in the unit cube, `1` for the uniform model.
    fn upper_bound(&self) -> f64;

    /// Returns the weight of the edge between `v` and `w`.
    fn weight(&mut self, v: usize, w: usize) -> f64;
}

impl<M: WeightModel + ?Sized> WeightModel for &mut M {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn upper_bound(&self) -> f64 {
        (**self).upper_bound()
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        (**self).weight(v, w)
    }
}

/// How edge weights are produced when `dimension == 0`.
///
/// Prim's evaluates each unordered pair at most once per trial, so both modes
/// yield the same distribution of MST weight. They differ in whether the
/// graph is well-defined under repeated queries and in memory cost.
///
/// # Examples
/// ```
/// use randmst_core::UniformWeights;
///
/// assert_eq!(UniformWeights::default(), UniformWeights::Fresh);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UniformWeights {
    /// Draw a new uniform weight on every query. O(n) memory; repeated
    /// queries of the same pair return different values.
    #[default]
    Fresh,
    /// Draw the symmetric weight triangle once per trial. O(n²) memory; the
    /// graph is fixed for the lifetime of the trial.
    Cached,
}

impl UniformWeights {
    /// Returns the lowercase label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Cached => "cached",
        }
    }
}
