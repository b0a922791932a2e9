//! Per-trial frontier state for dense Prim's.
//!
//! `dist[v]` holds the cheapest known edge from `v` into the growing tree and
//! `in_tree[v]` records admission. A node is admitted exactly once and its
//! `dist` entry is never written again after admission.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::{
    error::{Result, SimulationError},
    memory::{HEAP_STALE_FACTOR, checked_product, refill},
    weight::WeightModel,
};

#[derive(Debug, Default)]
pub(super) struct Frontier {
    dist: Vec<f64>,
    in_tree: Vec<bool>,
}

impl Frontier {
    /// Re-zeroes the frontier for `node_count` nodes, reusing capacity.
    ///
    /// Every `dist` entry starts at `sentinel` except the root (node 0),
    /// which starts at zero.
    pub(super) fn reset(&mut self, node_count: usize, sentinel: f64) -> Result<()> {
        refill(&mut self.dist, "frontier distances", node_count, sentinel)?;
        refill(&mut self.in_tree, "frontier membership", node_count, false)?;
        if let Some(root) = self.dist.first_mut() {
            *root = 0.0;
        }
        Ok(())
    }

    /// Linear scan for the outside node with the strictly smallest `dist`.
    ///
    /// Ties resolve to the lowest index because the running minimum only
    /// moves on `<`. The running minimum starts unset rather than at the
    /// sentinel, so a node whose `dist` still equals the sentinel remains
    /// selectable.
    pub(super) fn scan_min(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (node, (&dist, &in_tree)) in self.dist.iter().zip(&self.in_tree).enumerate() {
            if in_tree {
                continue;
            }
            if best.is_none_or(|(_, current)| dist < current) {
                best = Some((node, dist));
            }
        }
        best.map(|(node, _)| node)
    }

    /// Marks `node` as part of the tree and returns its admission weight.
    pub(super) fn admit(&mut self, node: usize) -> f64 {
        debug_assert!(!self.in_tree[node], "node {node} admitted twice");
        self.in_tree[node] = true;
        self.dist[node]
    }

    /// Lowers `dist[w]` to `weight(from, w)` for every outside node `w`,
    /// reporting each strict improvement to `on_improve`.
    pub(super) fn relax<M, F>(&mut self, model: &mut M, from: usize, mut on_improve: F)
    where
        M: WeightModel + ?Sized,
        F: FnMut(usize, f64),
    {
        for (node, (dist, &in_tree)) in self.dist.iter_mut().zip(&self.in_tree).enumerate() {
            if in_tree {
                continue;
            }
            let candidate = model.weight(from, node);
            if candidate < *dist {
                *dist = candidate;
                on_improve(node, candidate);
            }
        }
    }

    pub(super) fn is_admitted(&self, node: usize) -> bool {
        self.in_tree.get(node).copied().unwrap_or(false)
    }

    pub(super) fn dist(&self, node: usize) -> Option<f64> {
        self.dist.get(node).copied()
    }

    pub(super) fn len(&self) -> usize {
        self.dist.len()
    }
}

/// Heap key ordered by `(weight, node)` so that popping the minimum matches
/// the linear scan's lowest-index tie-break.
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierKey {
    pub(super) weight: f64,
    pub(super) node: usize,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy-deletion min-heap over frontier keys.
///
/// Stale entries (nodes already admitted, or superseded by a cheaper push)
/// are discarded on pop, and dropped wholesale by [`Self::compact`] once they
/// pile up. Capacity for the worst case is reserved at reset, so pushes never
/// reallocate.
#[derive(Debug, Default)]
pub(super) struct FrontierHeap {
    entries: BinaryHeap<Reverse<FrontierKey>>,
    limit: usize,
}

impl FrontierHeap {
    /// Seeds the heap with every node at its current frontier distance.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::AllocationFailed`] when the worst-case heap
    /// size overflows or cannot be reserved.
    pub(super) fn reset(&mut self, frontier: &Frontier) -> Result<()> {
        let node_count = frontier.len();
        let capacity = checked_product("frontier heap", node_count, HEAP_STALE_FACTOR + 1)?;
        self.entries.clear();
        self.entries
            .try_reserve_exact(capacity)
            .map_err(|_| SimulationError::AllocationFailed {
                what: "frontier heap",
                elements: capacity as u128,
            })?;
        self.limit = node_count.saturating_mul(HEAP_STALE_FACTOR);
        self.fill_live(frontier);
        Ok(())
    }

    pub(super) fn push(&mut self, node: usize, weight: f64) {
        self.entries.push(Reverse(FrontierKey { weight, node }));
    }

    /// Rebuilds the heap from the outside nodes once stale entries exceed
    /// the limit. Called between relaxations.
    pub(super) fn compact(&mut self, frontier: &Frontier) {
        if self.entries.len() > self.limit {
            self.fill_live(frontier);
        }
    }

    fn fill_live(&mut self, frontier: &Frontier) {
        self.entries.clear();
        for node in 0..frontier.len() {
            if frontier.is_admitted(node) {
                continue;
            }
            if let Some(weight) = frontier.dist(node) {
                self.entries.push(Reverse(FrontierKey { weight, node }));
            }
        }
    }

    /// Pops until a live entry surfaces.
    pub(super) fn pop_live(&mut self, frontier: &Frontier) -> Option<usize> {
        while let Some(Reverse(key)) = self.entries.pop() {
            if frontier.is_admitted(key.node) {
                continue;
            }
            if frontier.dist(key.node) == Some(key.weight) {
                return Some(key.node);
            }
        }
        None
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}
