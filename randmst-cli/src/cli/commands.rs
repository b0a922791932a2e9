//! Command implementations and argument parsing for the randmst CLI.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randmst_core::{Extraction, SimulationBuilder, SimulationError, UniformWeights};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Point counts visited by `sweep` when `--points` is not given.
pub const DEFAULT_SWEEP_POINTS: [i64; 12] = [
    128, 256, 512, 1_024, 2_048, 4_096, 8_192, 16_384, 32_768, 65_536, 131_072, 262_144,
];

/// Dimensions visited by `sweep` when `--dimensions` is not given.
pub const DEFAULT_SWEEP_DIMENSIONS: [i64; 4] = [0, 2, 3, 4];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randmst",
    about = "Estimate the expected weight of a random minimum spanning tree."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Estimate the mean MST weight for one point count and dimension.
    Run(RunCommand),
    /// Estimate the mean MST weight over a grid of point counts and
    /// dimensions.
    Sweep(SweepCommand),
}

/// Options accepted by the `run` command.
///
/// The counts are given either positionally, as `run 1024 5 2`, or with
/// `--points`, `--trials` and `--dimension`. The two forms cannot be mixed.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Point count, trial count and dimension, in that order.
    #[arg(
        num_args = 3,
        value_names = ["POINTS", "TRIALS", "DIMENSION"],
        allow_negative_numbers = true,
        conflicts_with_all = ["points", "trials", "dimension"],
        required_unless_present_all = ["points", "trials", "dimension"],
    )]
    pub positional: Vec<i64>,

    /// Number of points per trial.
    #[arg(long, allow_negative_numbers = true, requires_all = ["trials", "dimension"])]
    pub points: Option<i64>,

    /// Number of trials to average.
    #[arg(long, allow_negative_numbers = true, requires_all = ["points", "dimension"])]
    pub trials: Option<i64>,

    /// Embedding dimension; `0` selects independent uniform edge weights.
    #[arg(long, allow_negative_numbers = true, requires_all = ["points", "trials"])]
    pub dimension: Option<i64>,

    /// Options shared with `sweep`.
    #[command(flatten)]
    pub options: SimulationOptions,
}

impl RunCommand {
    /// Returns `(points, trials, dimension)` from whichever form was given.
    ///
    /// The flags win when both forms are filled in, which only happens for
    /// commands built without clap.
    #[must_use]
    pub fn counts(&self) -> Option<(i64, i64, i64)> {
        if let (Some(points), Some(trials), Some(dimension)) =
            (self.points, self.trials, self.dimension)
        {
            return Some((points, trials, dimension));
        }
        match self.positional.as_slice() {
            &[points, trials, dimension] => Some((points, trials, dimension)),
            _ => None,
        }
    }
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Number of trials to average for every grid point.
    #[arg(long, allow_negative_numbers = true)]
    pub trials: i64,

    /// Point counts to visit.
    #[arg(
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_SWEEP_POINTS,
    )]
    pub points: Vec<i64>,

    /// Dimensions to visit. Each dimension covers every point count before
    /// the next dimension starts.
    #[arg(
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = DEFAULT_SWEEP_DIMENSIONS,
    )]
    pub dimensions: Vec<i64>,

    /// Options shared with `run`.
    #[command(flatten)]
    pub options: SimulationOptions,
}

/// Simulation options shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct SimulationOptions {
    /// Seed for a reproducible run. Entropy seeding is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Strategy used by Prim's to find the next node.
    #[arg(long, value_enum, default_value_t = ExtractionArg::Linear)]
    pub extraction: ExtractionArg,

    /// How uniform weights are produced when the dimension is zero.
    #[arg(long = "uniform-weights", value_enum, default_value_t = UniformArg::Fresh)]
    pub uniform_weights: UniformArg,

    /// Append every record to this file, creating it if missing.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

/// Prim's extraction strategy as spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExtractionArg {
    /// Linear scan over the frontier.
    #[default]
    Linear,
    /// Lazy-deletion binary heap.
    Heap,
}

impl From<ExtractionArg> for Extraction {
    fn from(value: ExtractionArg) -> Self {
        match value {
            ExtractionArg::Linear => Self::LinearScan,
            ExtractionArg::Heap => Self::BinaryHeap,
        }
    }
}

/// Uniform weight mode as spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UniformArg {
    /// Draw a new weight on every query.
    #[default]
    Fresh,
    /// Draw the weight triangle once per trial.
    Cached,
}

impl From<UniformArg> for UniformWeights {
    fn from(value: UniformArg) -> Self {
        match value {
            UniformArg::Fresh => Self::Fresh,
            UniformArg::Cached => Self::Cached,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Appending a record to the log file failed.
    #[error("failed to append to `{path}`: {source}")]
    Io {
        /// Log file that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing a record to the output stream failed.
    #[error("failed to write record: {0}")]
    Output(#[source] io::Error),
    /// A `run` command was built without a complete set of counts.
    #[error("run needs a point count, a trial count and a dimension")]
    MissingCounts,
    /// The simulation rejected its configuration or failed to allocate.
    #[error(transparent)]
    Core(#[from] SimulationError),
}

/// One completed estimate.
///
/// Displays as the single-line record written to stdout and the log file.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use randmst_cli::cli::SimulationRecord;
///
/// let record = SimulationRecord {
///     dimension: 2,
///     points: 128,
///     mean_weight: 6.5,
///     elapsed: Duration::from_millis(1_250),
/// };
/// assert_eq!(
///     record.to_string(),
///     "Average MST weight for dim: (2) and points (128) is (6.500000) and took (1.250) seconds",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRecord {
    /// Embedding dimension.
    pub dimension: usize,
    /// Number of points per trial.
    pub points: usize,
    /// Mean MST weight across trials.
    pub mean_weight: f64,
    /// Wall-clock time spent on the estimate.
    pub elapsed: Duration,
}

impl fmt::Display for SimulationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average MST weight for dim: ({}) and points ({}) is ({:.6}) and took ({:.3}) seconds",
            self.dimension,
            self.points,
            self.mean_weight,
            self.elapsed.as_secs_f64(),
        )
    }
}

/// Summarises a completed command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOutcome {
    /// Records in completion order.
    pub records: Vec<SimulationRecord>,
    /// Number of records that could not be appended to the log file.
    pub log_failures: usize,
}

/// Executes the CLI command represented by `cli`, echoing each record to
/// `out` as soon as it completes.
///
/// `run` fails if its record cannot be appended to the log file. `sweep`
/// logs a warning, counts the failure in [`SweepOutcome::log_failures`] and
/// carries on with the next grid point.
///
/// # Errors
/// Returns [`CliError`] when a simulation is rejected or fails, when writing
/// to `out` fails, or when `run` cannot append to its log file.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randmst_cli::cli::{Cli, Command, RunCommand, SimulationOptions, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         positional: Vec::new(),
///         points: Some(1),
///         trials: Some(3),
///         dimension: Some(2),
///         options: SimulationOptions::default(),
///     }),
/// };
/// let mut out = Vec::new();
/// let outcome = run_cli(cli, &mut out)?;
/// assert_eq!(outcome.records.len(), 1);
/// assert_eq!(outcome.records[0].mean_weight, 0.0);
/// assert!(String::from_utf8(out)?.starts_with("Average MST weight for dim: (2)"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, out),
    fields(command = field::Empty),
)]
pub fn run_cli<W: Write>(cli: Cli, out: &mut W) -> Result<SweepOutcome, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, out)
        }
        Command::Sweep(sweep) => {
            Span::current().record("command", field::display("sweep"));
            sweep_command(sweep, out)
        }
    }
}

pub(super) fn run_command<W: Write>(
    command: RunCommand,
    out: &mut W,
) -> Result<SweepOutcome, CliError> {
    let (points, trials, dimension) = command.counts().ok_or(CliError::MissingCounts)?;
    let record = simulate(points, trials, dimension, &command.options)?;
    render_record(&record, &mut *out).map_err(CliError::Output)?;
    if let Some(path) = command.options.log_file.as_deref() {
        append_record(path, &record).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(SweepOutcome {
        records: vec![record],
        log_failures: 0,
    })
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command, out),
    fields(
        trials = command.trials,
        grid_points = command.points.len() * command.dimensions.len(),
    ),
)]
pub(super) fn sweep_command<W: Write>(
    command: SweepCommand,
    out: &mut W,
) -> Result<SweepOutcome, CliError> {
    let mut outcome = SweepOutcome::default();
    for &dimension in &command.dimensions {
        for &points in &command.points {
            let record = simulate(points, command.trials, dimension, &command.options)?;
            render_record(&record, &mut *out).map_err(CliError::Output)?;
            if let Some(path) = command.options.log_file.as_deref() {
                if let Err(err) = append_record(path, &record) {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        dimension = record.dimension,
                        points = record.points,
                        "failed to append record to log file"
                    );
                    outcome.log_failures += 1;
                }
            }
            outcome.records.push(record);
        }
    }
    info!(
        records = outcome.records.len(),
        log_failures = outcome.log_failures,
        "sweep completed"
    );
    Ok(outcome)
}

#[instrument(
    name = "cli.simulate",
    err,
    skip(options),
    fields(seed = field::Empty),
)]
pub(super) fn simulate(
    points: i64,
    trials: i64,
    dimension: i64,
    options: &SimulationOptions,
) -> Result<SimulationRecord, CliError> {
    let mut builder = SimulationBuilder::new()
        .with_point_count(points)
        .with_trial_count(trials)
        .with_dimension(dimension)
        .with_extraction(options.extraction.into())
        .with_uniform_weights(options.uniform_weights.into());
    if let Some(seed) = options.seed {
        Span::current().record("seed", seed);
        builder = builder.with_seed(seed);
    }
    let simulation = builder.build()?;

    let started = Instant::now();
    let result = simulation.run()?;
    let elapsed = started.elapsed();

    Ok(SimulationRecord {
        dimension: result.dimension(),
        points: result.point_count(),
        mean_weight: result.mean_weight(),
        elapsed,
    })
}

/// Writes `record` to `writer` as one line and flushes it.
///
/// # Errors
/// Returns [`io::Error`] if writing to or flushing the writer fails.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use randmst_cli::cli::{SimulationRecord, render_record};
/// let record = SimulationRecord {
///     dimension: 0,
///     points: 4,
///     mean_weight: 1.0,
///     elapsed: Duration::ZERO,
/// };
/// let mut buffer = Vec::new();
/// render_record(&record, &mut buffer)?;
/// assert!(buffer.ends_with(b"took (0.000) seconds\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_record(record: &SimulationRecord, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{record}")?;
    writer.flush()
}

/// Appends `record` as one line to the file at `path`, creating it if
/// missing.
///
/// # Errors
/// Returns [`io::Error`] if the file cannot be opened or written.
pub fn append_record(path: &Path, record: &SimulationRecord) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{record}")
}
