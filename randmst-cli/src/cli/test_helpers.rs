//! Small helpers shared across CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{
    Cli, CliError, Command, RunCommand, SimulationOptions, SweepCommand, SweepOutcome, run_cli,
};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Seeded options with an optional log file.
pub(super) fn seeded_options(log_file: Option<PathBuf>) -> SimulationOptions {
    SimulationOptions {
        seed: Some(17),
        log_file,
        ..SimulationOptions::default()
    }
}

pub(super) fn run(points: i64, trials: i64, dimension: i64, options: SimulationOptions) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            positional: Vec::new(),
            points: Some(points),
            trials: Some(trials),
            dimension: Some(dimension),
            options,
        }),
    }
}

pub(super) fn sweep(
    trials: i64,
    points: Vec<i64>,
    dimensions: Vec<i64>,
    options: SimulationOptions,
) -> Cli {
    Cli {
        command: Command::Sweep(SweepCommand {
            trials,
            points,
            dimensions,
            options,
        }),
    }
}

/// Runs `cli` against an in-memory stdout, returning the outcome and the text
/// written.
pub(super) fn run_capturing(cli: Cli) -> (Result<SweepOutcome, CliError>, String) {
    let mut out = Vec::new();
    let outcome = run_cli(cli, &mut out);
    let text = match String::from_utf8(out) {
        Ok(text) => text,
        Err(err) => panic!("records must be UTF-8: {err}"),
    };
    (outcome, text)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_capturing(cli).0 {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
