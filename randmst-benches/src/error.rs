//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use randmst_core::SimulationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Simulation configuration or allocation failed.
    #[error("simulation setup failed: {0}")]
    Simulation(#[from] SimulationError),
    /// A generated buffer did not match the requested shape.
    #[error("generated {what} does not match {point_count} points")]
    ShapeMismatch {
        /// Name of the mis-shaped buffer.
        what: &'static str,
        /// Requested point count.
        point_count: usize,
    },
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A benchmark size did not fit the simulation's argument type.
    #[error("{context} is out of range for a simulation argument")]
    OutOfRange {
        /// A description of the parameter that overflowed.
        context: &'static str,
    },
}
