//! Calculator trait, error type, and the `Dispatcher`.
//!
//! `Calculator` is the public trait implemented by both computation paths.
//! `Dispatcher` validates input, answers the trivial cases, and routes each
//! `n` to the exact or approximate calculator based on the exact threshold.

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::options::Options;
use crate::value::FactorialValue;

/// Error type for factorial calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorialError {
    /// The input is not a non-negative integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A parallel unit of the exact path failed.
    #[error("computation failure: {0}")]
    ComputationFailure(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Validate a raw input, returning it as an unsigned value.
pub fn validate(n: i64) -> Result<u64, FactorialError> {
    u64::try_from(n).map_err(|_| {
        FactorialError::InvalidArgument(format!(
            "factorial is defined only for non-negative integers, got {n}"
        ))
    })
}

/// Public trait for factorial calculators.
pub trait Calculator: Send + Sync {
    /// Calculate `n!` with the given options.
    fn calculate(&self, n: u64, opts: &Options) -> Result<FactorialValue, FactorialError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Routes each `n` to the exact calculator (`n <= threshold`) or the
/// approximate calculator (`n > threshold`).
pub struct Dispatcher {
    exact: Arc<dyn Calculator>,
    approximate: Arc<dyn Calculator>,
}

impl Dispatcher {
    /// Create a dispatcher over the two paths.
    #[must_use]
    pub fn new(exact: Arc<dyn Calculator>, approximate: Arc<dyn Calculator>) -> Self {
        Self { exact, approximate }
    }

    /// Validate `n`, compute `n!`, and render it as a string.
    ///
    /// # Example
    /// ```
    /// use factcalc_core::{Dispatcher, Options};
    ///
    /// let dispatcher = Dispatcher::default();
    /// let opts = Options::default();
    /// assert_eq!(dispatcher.compute(5, &opts).unwrap(), "120");
    /// assert!(dispatcher.compute(-1, &opts).is_err());
    /// ```
    pub fn compute(&self, n: i64, opts: &Options) -> Result<String, FactorialError> {
        let n = validate(n)?;
        self.calculate(n, opts).map(|value| value.to_string())
    }

    /// Whether `n` is served by the exact path under `opts`.
    #[must_use]
    pub fn uses_exact_path(n: u64, opts: &Options) -> bool {
        n <= opts.exact_threshold
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::reducer::RangeProductReducer::default()),
            Arc::new(crate::stirling::StirlingEstimator::new()),
        )
    }
}

impl Calculator for Dispatcher {
    fn calculate(&self, n: u64, opts: &Options) -> Result<FactorialValue, FactorialError> {
        // 0! = 1! = 1, no parallel work needed
        if n <= 1 {
            debug!(n, "trivial factorial");
            return Ok(FactorialValue::Exact(BigUint::one()));
        }

        if Self::uses_exact_path(n, opts) {
            debug!(n, calculator = self.exact.name(), "routing to exact path");
            self.exact.calculate(n, opts)
        } else {
            debug!(
                n,
                calculator = self.approximate.name(),
                "routing to approximate path"
            );
            self.approximate.calculate(n, opts)
        }
    }

    fn name(&self) -> &'static str {
        "Auto"
    }
}
