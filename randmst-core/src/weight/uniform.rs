use rand::Rng;

use super::WeightModel;

/// Uniform model that draws a new weight on every query.
///
/// This is not a fixed graph: asking for the same pair twice yields two
/// independent draws. Prim's never repeats a pair within a trial, which keeps
/// the resulting MST weight distribution identical to [`CachedUniform`].
#[derive(Debug)]
pub struct FreshUniform<'a, R> {
    node_count: usize,
    rng: &'a mut R,
}

impl<'a, R: Rng> FreshUniform<'a, R> {
    /// Creates a model over `node_count` nodes drawing from `rng`.
    pub fn new(node_count: usize, rng: &'a mut R) -> Self {
        Self { node_count, rng }
    }
}

impl<R: Rng> WeightModel for FreshUniform<'_, R> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn upper_bound(&self) -> f64 {
        1.0
    }

    fn weight(&mut self, _v: usize, _w: usize) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Uniform model backed by a symmetric weight triangle drawn once per trial.
///
/// Entry `(v, w)` with `v < w` lives at `w * (w - 1) / 2 + v`.
///
/// # Examples
///
/// ```
/// use randmst_core::{CachedUniform, WeightModel};
///
/// // Three nodes: (0,1) = 0.1, (0,2) = 0.2, (1,2) = 0.3.
/// let triangle = [0.1, 0.2, 0.3];
/// let mut model = CachedUniform::new(3, &triangle).expect("triangle for n = 3");
/// assert_eq!(model.weight(2, 1), 0.3);
/// assert_eq!(model.weight(1, 2), model.weight(2, 1));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CachedUniform<'a> {
    node_count: usize,
    triangle: &'a [f64],
}

impl<'a> CachedUniform<'a> {
    /// Wraps a strict upper triangle of `node_count * (node_count - 1) / 2`
    /// weights. Returns `None` when the length does not match.
    #[must_use]
    pub fn new(node_count: usize, triangle: &'a [f64]) -> Option<Self> {
        let expected = node_count.checked_mul(node_count.saturating_sub(1))? / 2;
        (triangle.len() == expected).then_some(Self {
            node_count,
            triangle,
        })
    }

    /// Wraps a triangle whose length the caller has already established.
    pub(crate) const fn from_parts(node_count: usize, triangle: &'a [f64]) -> Self {
        Self {
            node_count,
            triangle,
        }
    }
}

impl WeightModel for CachedUniform<'_> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn upper_bound(&self) -> f64 {
        1.0
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        let (low, high) = if v < w { (v, w) } else { (w, v) };
        if low == high {
            return 0.0;
        }
        self.triangle[high * (high - 1) / 2 + low]
    }
}
