//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use factcalc_core::{ExecutorKind, Options, DEFAULT_EXACT_THRESHOLD, DEFAULT_MANTISSA_PRECISION};

/// Calculator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Exact up to the threshold, Stirling above it.
    Auto,
    /// Always compute the exact product.
    Exact,
    /// Always use the Stirling approximation.
    Stirling,
}

impl Algorithm {
    /// Registry name of the calculator.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact => "exact",
            Self::Stirling => "stirling",
        }
    }
}

/// Executor for the exact path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutorArg {
    /// Dedicated rayon thread pool.
    Rayon,
    /// One OS thread per chunk.
    Threads,
    /// No parallelism.
    Sequential,
}

impl From<ExecutorArg> for ExecutorKind {
    fn from(arg: ExecutorArg) -> Self {
        match arg {
            ExecutorArg::Rayon => Self::Rayon,
            ExecutorArg::Threads => Self::Threads,
            ExecutorArg::Sequential => Self::Sequential,
        }
    }
}

/// FactCalc-rs — factorial calculator with exact and Stirling paths.
#[derive(Parser, Debug)]
#[command(name = "factcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Integer whose factorial is computed.
    #[arg(
        short,
        long,
        env = "FACTCALC_N",
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub n: Option<i64>,

    /// Calculator to use.
    #[arg(long, value_enum, default_value_t = Algorithm::Auto)]
    pub algo: Algorithm,

    /// Executor for the exact path.
    #[arg(long, value_enum, default_value_t = ExecutorArg::Rayon)]
    pub executor: ExecutorArg,

    /// Number of chunks/workers for the exact path (0 = available parallelism).
    #[arg(short, long, default_value_t = 0)]
    pub workers: usize,

    /// Largest n computed exactly in auto mode.
    #[arg(long, default_value_t = DEFAULT_EXACT_THRESHOLD)]
    pub threshold: u64,

    /// Fractional digits of the Stirling mantissa.
    #[arg(long, default_value_t = DEFAULT_MANTISSA_PRECISION)]
    pub precision: usize,

    /// Use the bare Stirling formula without series correction.
    #[arg(long)]
    pub no_correction: bool,

    /// Verbose output (full exact results, debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            workers: self.workers,
            exact_threshold: self.threshold,
            precision: self.precision,
            series_correction: !self.no_correction,
        }
        .normalize()
    }
}
