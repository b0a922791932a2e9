//! Command-line interface for randmst.
//!
//! `run` estimates the mean MST weight for one `(points, dimension)` pair;
//! `sweep` repeats that over a grid of point counts and dimensions. Every
//! estimate is echoed as a one-line record and optionally appended to a log
//! file.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_SWEEP_DIMENSIONS, DEFAULT_SWEEP_POINTS, ExtractionArg,
    RunCommand, SimulationOptions, SimulationRecord, SweepCommand, SweepOutcome, UniformArg,
    append_record, render_record, run_cli,
};

#[cfg(test)]
mod test_helpers;
