//! # factcalc-core
//!
//! Core library for the FactCalc-rs factorial calculator.
//! Computes `n!` exactly by parallel chunked multiplication for small `n`
//! and approximates it with Stirling's formula above the exact threshold.

pub mod calculator;
pub mod chunk;
pub mod constants;
pub mod executor;
pub mod options;
pub mod reducer;
pub mod registry;
pub mod stirling;
pub mod value;

// Re-exports
pub use calculator::{validate, Calculator, Dispatcher, FactorialError};
pub use chunk::{partition, Chunk};
pub use constants::{
    exit_codes, DEFAULT_EXACT_THRESHOLD, DEFAULT_MANTISSA_PRECISION, DEFAULT_WORKER_FALLBACK,
};
pub use executor::{ParallelExecutor, RayonExecutor, ScopedThreadExecutor, SequentialExecutor};
pub use options::Options;
pub use reducer::RangeProductReducer;
pub use registry::{CalculatorFactory, DefaultFactory, ExecutorKind};
pub use stirling::StirlingEstimator;
pub use value::{Approximation, FactorialValue};

/// Compute `n!` as a string with default options.
///
/// Returns the exact decimal value for `n <= 20` and a Stirling
/// approximation such as `"4.023872600765529e+2567"` above that.
///
/// # Example
/// ```
/// assert_eq!(factcalc_core::compute(5).unwrap(), "120");
/// assert_eq!(factcalc_core::compute(20).unwrap(), "2432902008176640000");
/// assert!(factcalc_core::compute(-3).is_err());
/// ```
pub fn compute(n: i64) -> Result<String, FactorialError> {
    Dispatcher::default().compute(n, &Options::default())
}

/// Compute `n!` with the dispatcher's default routing.
///
/// This is a convenience function for simple use cases. For a custom
/// executor, worker count, or threshold, build a `Dispatcher` directly.
///
/// # Example
/// ```
/// let value = factcalc_core::factorial(10);
/// assert_eq!(value.to_string(), "3628800");
/// assert!(value.is_exact());
/// ```
#[must_use]
pub fn factorial(n: u64) -> FactorialValue {
    let dispatcher = Dispatcher::new(
        std::sync::Arc::new(RangeProductReducer::with_executor(SequentialExecutor::new())),
        std::sync::Arc::new(StirlingEstimator::new()),
    );
    dispatcher
        .calculate(n, &Options::default())
        .expect("sequential exact path and Stirling estimation do not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_known_values() {
        assert_eq!(compute(0).unwrap(), "1");
        assert_eq!(compute(1).unwrap(), "1");
        assert_eq!(compute(5).unwrap(), "120");
        assert_eq!(compute(20).unwrap(), "2432902008176640000");
    }

    #[test]
    fn compute_rejects_negative() {
        assert!(matches!(compute(-1), Err(FactorialError::InvalidArgument(_))));
    }

    #[test]
    fn compute_1000() {
        let s = compute(1000).unwrap();
        assert!(s.starts_with("4.02387"), "{s}");
        assert!(s.ends_with("e+2567"), "{s}");
    }

    #[test]
    fn compute_is_idempotent() {
        for n in [7, 20, 21, 500] {
            assert_eq!(compute(n).unwrap(), compute(n).unwrap());
        }
    }

    #[test]
    fn factorial_convenience() {
        assert_eq!(factorial(12).to_string(), "479001600");
        assert!(!factorial(21).is_exact());
    }
}
