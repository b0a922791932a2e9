//! Shared test utilities used across randmst crates.
//!
//! - [`tracing`] captures spans and events so suites can assert on the
//!   structured diagnostics emitted by the simulation and the CLI.
//! - [`profile`] reads property-test tuning knobs from the environment.

pub mod profile;
pub mod tracing;
