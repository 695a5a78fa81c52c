//! Calculation options and configuration.

use crate::constants::{
    DEFAULT_EXACT_THRESHOLD, DEFAULT_MANTISSA_PRECISION, MAX_MANTISSA_PRECISION,
};

/// Options for factorial calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of parallel workers for the exact path (0 = available parallelism).
    pub workers: usize,
    /// Largest `n` computed exactly by the dispatcher.
    pub exact_threshold: u64,
    /// Fractional digits of the Stirling mantissa.
    pub precision: usize,
    /// Apply the Stirling series correction terms
    /// `1/(12n) − 1/(360n³) + 1/(1260n⁵)` to `ln(n!)`.
    ///
    /// On by default, so default output does not match the bare formula
    /// `n·ln(n) − n + ½·ln(2πn)`: `1000!` prints as `4.0238726007…e+2567`
    /// with the correction and `4.0235372920…e+2567` without it. Set to
    /// `false` (`--no-correction` on the CLI) to reproduce the bare formula.
    pub series_correction: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            workers: 0,
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            precision: DEFAULT_MANTISSA_PRECISION,
            series_correction: true,
        }
    }
}

impl Options {
    /// Normalize options: clamp the precision to what an `f64` can carry.
    ///
    /// `workers == 0` is kept and resolved at call time by
    /// [`resolve_workers`](Self::resolve_workers).
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.precision > MAX_MANTISSA_PRECISION {
            self.precision = MAX_MANTISSA_PRECISION;
        }
        self
    }

    /// Effective worker count for the exact path.
    #[must_use]
    pub fn resolve_workers(&self) -> usize {
        if self.workers == 0 {
            crate::executor::available_workers()
        } else {
            self.workers
        }
    }
}
