use super::WeightModel;

/// Borrowed point cloud with Euclidean (L2) edge weights.
///
/// Coordinates are stored row-major: point `v` occupies
/// `coords[v * dimension..(v + 1) * dimension]`.
///
/// # Examples
///
/// ```
/// use randmst_core::{EuclideanCloud, WeightModel};
///
/// let coords = [0.0, 0.0, 3.0, 4.0];
/// let mut cloud = EuclideanCloud::new(2, &coords).expect("two points in 2-D");
/// assert_eq!(cloud.node_count(), 2);
/// assert!((cloud.weight(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EuclideanCloud<'a> {
    dimension: usize,
    coords: &'a [f64],
}

impl<'a> EuclideanCloud<'a> {
    /// Wraps a row-major coordinate slice.
    ///
    /// Returns `None` when `dimension` is zero or `coords.len()` is not a
    /// multiple of `dimension`.
    #[must_use]
    pub fn new(dimension: usize, coords: &'a [f64]) -> Option<Self> {
        if dimension == 0 || coords.len() % dimension != 0 {
            return None;
        }
        Some(Self { dimension, coords })
    }

    /// Wraps a buffer whose shape the caller has already established.
    pub(crate) const fn from_parts(dimension: usize, coords: &'a [f64]) -> Self {
        Self { dimension, coords }
    }

    /// Returns the embedding dimension.
    #[must_use]
    #[rustfmt::skip]
    pub fn dimension(&self) -> usize { self.dimension }

    /// Returns the coordinates of point `v`.
    ///
    /// # Panics
    ///
    /// Panics when `v >= self.node_count()`.
    #[must_use]
    pub fn point(&self, v: usize) -> &'a [f64] {
        let start = v * self.dimension;
        &self.coords[start..start + self.dimension]
    }
}

impl WeightModel for EuclideanCloud<'_> {
    fn node_count(&self) -> usize {
        self.coords.len() / self.dimension
    }

    fn upper_bound(&self) -> f64 {
        (self.dimension as f64).sqrt()
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        self.point(v)
            .iter()
            .zip(self.point(w))
            .map(|(a, b)| {
                let diff = a - b;
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}
