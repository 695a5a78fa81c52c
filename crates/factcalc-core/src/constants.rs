//! Constants for factorial dispatch, parallelism, and formatting.

/// Largest `n` routed to the exact path by default. 20! is also the
/// largest factorial that fits in a `u64`.
pub const DEFAULT_EXACT_THRESHOLD: u64 = 20;

/// Worker count used when the platform cannot report its parallelism.
pub const DEFAULT_WORKER_FALLBACK: usize = 4;

/// Fractional digits printed for the Stirling mantissa.
pub const DEFAULT_MANTISSA_PRECISION: usize = 15;

/// Upper bound on the mantissa precision (f64 carries ~17 significant digits).
pub const MAX_MANTISSA_PRECISION: usize = 17;

/// Exit codes for the `factcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Computation failed (a parallel unit errored or panicked).
    pub const ERROR_COMPUTATION: i32 = 1;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
