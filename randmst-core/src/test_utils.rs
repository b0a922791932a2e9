//! Shared test utilities for `randmst-core`.

use std::collections::HashMap;

use proptest::test_runner::Config as ProptestConfig;
use randmst_test_support::profile::ProptestRunProfile;

use crate::weight::WeightModel;

/// Builds a standard proptest configuration from the shared profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `RANDMST_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Explicit symmetric weight matrix.
///
/// The upper bound is the largest entry, so nodes whose cheapest edge equals
/// that entry exercise the sentinel-equality path.
#[derive(Clone, Debug)]
pub(crate) struct MatrixModel {
    rows: Vec<Vec<f64>>,
    upper_bound: f64,
}

impl MatrixModel {
    /// Wraps explicit rows. Callers supply a symmetric matrix.
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let upper_bound = rows
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max);
        Self { rows, upper_bound }
    }

    /// Builds a complete graph with `weight(low, high)` for every pair.
    pub(crate) fn complete(node_count: usize, weight: impl Fn(usize, usize) -> f64) -> Self {
        let rows = (0..node_count)
            .map(|v| {
                (0..node_count)
                    .map(|w| match v.cmp(&w) {
                        std::cmp::Ordering::Equal => 0.0,
                        std::cmp::Ordering::Less => weight(v, w),
                        std::cmp::Ordering::Greater => weight(w, v),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Reads an entry without counting as a query.
    pub(crate) fn entry(&self, v: usize, w: usize) -> f64 {
        self.rows[v][w]
    }
}

impl WeightModel for MatrixModel {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        self.rows[v][w]
    }
}

/// [`WeightModel`] wrapper that records every weight query.
#[derive(Debug)]
pub(crate) struct CountingModel<M> {
    inner: M,
    calls: usize,
    pairs: HashMap<(usize, usize), usize>,
}

impl<M: WeightModel> CountingModel<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self {
            inner,
            calls: 0,
            pairs: HashMap::new(),
        }
    }

    /// Total number of weight queries so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    /// Largest number of times any single unordered pair was queried.
    pub(crate) fn max_pair_repeats(&self) -> usize {
        self.pairs.values().copied().max().unwrap_or(0)
    }
}

impl<M: WeightModel> WeightModel for CountingModel<M> {
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn upper_bound(&self) -> f64 {
        self.inner.upper_bound()
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        self.calls += 1;
        let key = if v < w { (v, w) } else { (w, v) };
        *self.pairs.entry(key).or_insert(0) += 1;
        self.inner.weight(v, w)
    }
}
