//! Dense Prim's minimum spanning tree (MST) construction.
//!
//! The builder grows a single tree from node 0 over the implicit complete
//! graph described by a [`WeightModel`]. Each step extracts the outside node
//! with the cheapest connection to the tree, admits it, and relaxes the
//! frontier against the newly admitted node. Every unordered pair is
//! evaluated exactly once, so a trial costs `n(n-1)/2` weight evaluations.
//!
//! Extraction is a linear scan by default, giving O(n²) total work with no
//! auxiliary structures. This is the intended regime: the graphs are complete,
//! so a heap cannot reduce the number of relaxations. [`Extraction::BinaryHeap`]
//! is offered as an explicit alternative and is never selected implicitly.

mod frontier;

use tracing::trace;

use crate::{error::Result, weight::WeightModel};

use self::frontier::{Frontier, FrontierHeap};

/// Strategy used to find the next node to admit.
///
/// Both strategies admit nodes in the same order: the cheapest outside node,
/// with ties resolved to the lowest index.
///
/// # Examples
/// ```
/// use randmst_core::Extraction;
///
/// assert_eq!(Extraction::default(), Extraction::LinearScan);
/// assert_eq!(Extraction::BinaryHeap.as_str(), "heap");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Extraction {
    /// Scan every outside node on each step.
    #[default]
    LinearScan,
    /// Pop from a lazy-deletion binary heap keyed by `(weight, node)`.
    BinaryHeap,
}

impl Extraction {
    /// Returns the lowercase label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinearScan => "linear",
            Self::BinaryHeap => "heap",
        }
    }
}

/// One admission made while growing the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Admission {
    step: usize,
    node: usize,
    weight: f64,
    total: f64,
}

impl Admission {
    /// Zero-based position of this admission within the trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn step(&self) -> usize { self.step }

    /// Index of the admitted node.
    #[must_use]
    #[rustfmt::skip]
    pub fn node(&self) -> usize { self.node }

    /// Weight of the edge that connected the node to the tree (zero for the
    /// root).
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Running tree weight including this admission.
    #[must_use]
    #[rustfmt::skip]
    pub fn total(&self) -> f64 { self.total }
}

/// Reusable Prim's engine.
///
/// The frontier buffers are kept between calls to [`MstBuilder::build`] and
/// re-zeroed at the start of each, so a simulation allocates them once per
/// run.
///
/// # Examples
/// ```
/// use randmst_core::{EuclideanCloud, Extraction, MstBuilder};
///
/// let coords = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0];
/// let mut cloud = EuclideanCloud::new(2, &coords).expect("unit square");
/// let mut builder = MstBuilder::new(Extraction::LinearScan);
/// let total = builder.build(&mut cloud)?;
/// assert!((total - 3.0).abs() < 1e-9);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
#[derive(Debug, Default)]
pub struct MstBuilder {
    extraction: Extraction,
    frontier: Frontier,
    heap: FrontierHeap,
}

impl MstBuilder {
    /// Creates a builder using the given extraction strategy.
    #[must_use]
    pub fn new(extraction: Extraction) -> Self {
        Self {
            extraction,
            frontier: Frontier::default(),
            heap: FrontierHeap::default(),
        }
    }

    /// Returns the configured extraction strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn extraction(&self) -> Extraction { self.extraction }

    /// Computes the total MST weight over `model`.
    ///
    /// Returns `0.0` for graphs with zero or one node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimulationError::AllocationFailed`] when the frontier,
    /// or the heap in [`Extraction::BinaryHeap`] mode, cannot be sized for
    /// `model.node_count()` nodes.
    pub fn build<M: WeightModel + ?Sized>(&mut self, model: &mut M) -> Result<f64> {
        self.build_observed(model, |_| {})
    }

    /// Computes the total MST weight, reporting every admission in order.
    ///
    /// `on_admit` is called exactly `model.node_count()` times, once per node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimulationError::AllocationFailed`] when the frontier
    /// cannot be sized for `model.node_count()` nodes.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::{EuclideanCloud, Extraction, MstBuilder};
    ///
    /// let coords = [0.0, 0.3, 0.1];
    /// let mut line = EuclideanCloud::new(1, &coords).expect("three points on a line");
    /// let mut order = Vec::new();
    /// MstBuilder::new(Extraction::LinearScan)
    ///     .build_observed(&mut line, |admission| order.push(admission.node()))?;
    /// assert_eq!(order, vec![0, 2, 1]);
    /// # Ok::<(), randmst_core::SimulationError>(())
    /// ```
    pub fn build_observed<M, F>(&mut self, model: &mut M, mut on_admit: F) -> Result<f64>
    where
        M: WeightModel + ?Sized,
        F: FnMut(Admission),
    {
        let node_count = model.node_count();
        self.frontier.reset(node_count, model.upper_bound())?;
        if self.extraction == Extraction::BinaryHeap {
            self.heap.reset(&self.frontier)?;
        }

        let mut total = 0.0;
        let mut step = 0;
        while let Some(next) = self.next_node() {
            let weight = self.frontier.admit(next);
            total += weight;
            on_admit(Admission {
                step,
                node: next,
                weight,
                total,
            });
            step += 1;

            match self.extraction {
                Extraction::LinearScan => self.frontier.relax(model, next, |_, _| {}),
                Extraction::BinaryHeap => {
                    let heap = &mut self.heap;
                    self.frontier
                        .relax(model, next, |node, weight| heap.push(node, weight));
                    self.heap.compact(&self.frontier);
                }
            }
        }

        trace!(nodes = node_count, admitted = step, total, "prim completed");
        Ok(total)
    }

    fn next_node(&mut self) -> Option<usize> {
        match self.extraction {
            Extraction::LinearScan => self.frontier.scan_min(),
            Extraction::BinaryHeap => self.heap.pop_live(&self.frontier),
        }
    }
}

/// Computes the total MST weight of `model` with a one-off builder.
///
/// # Errors
///
/// Returns [`crate::SimulationError::AllocationFailed`] when the frontier
/// cannot be sized for `model.node_count()` nodes.
///
/// # Examples
/// ```
/// use randmst_core::{EuclideanCloud, Extraction, prim_mst_weight};
///
/// let mut empty = EuclideanCloud::new(3, &[]).expect("no points");
/// assert_eq!(prim_mst_weight(&mut empty, Extraction::LinearScan)?, 0.0);
/// # Ok::<(), randmst_core::SimulationError>(())
/// ```
pub fn prim_mst_weight<M: WeightModel + ?Sized>(
    model: &mut M,
    extraction: Extraction,
) -> Result<f64> {
    MstBuilder::new(extraction).build(model)
}

/// Computes the total MST weight of `model`, reporting every admission in
/// order to `on_admit`.
///
/// # Errors
///
/// Returns [`crate::SimulationError::AllocationFailed`] when the frontier
/// cannot be sized for `model.node_count()` nodes.
pub fn prim_mst_with_observer<M, F>(
    model: &mut M,
    extraction: Extraction,
    on_admit: F,
) -> Result<f64>
where
    M: WeightModel + ?Sized,
    F: FnMut(Admission),
{
    MstBuilder::new(extraction).build_observed(model, on_admit)
}

#[cfg(test)]
mod property;
