use randmst_core::WeightModel;

/// Points on the real line, weighted by absolute difference.
#[derive(Clone, Debug)]
pub struct LinePoints {
    positions: Vec<f64>,
}

impl LinePoints {
    #[must_use]
    pub fn new(positions: Vec<f64>) -> Self {
        Self { positions }
    }
}

impl WeightModel for LinePoints {
    fn node_count(&self) -> usize {
        self.positions.len()
    }

    fn upper_bound(&self) -> f64 {
        1.0
    }

    fn weight(&mut self, v: usize, w: usize) -> f64 {
        (self.positions[v] - self.positions[w]).abs()
    }
}
