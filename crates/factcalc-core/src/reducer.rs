//! Exact factorial by parallel chunked multiplication.
//!
//! `[1, n]` is split into one chunk per worker, each chunk product is
//! computed by the injected executor, and the partial products are folded
//! left to right in chunk order on the calling thread.

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::calculator::{Calculator, FactorialError};
use crate::chunk::partition;
use crate::executor::{ParallelExecutor, RayonExecutor};
use crate::options::Options;
use crate::value::FactorialValue;

/// Computes `n!` exactly with a `ParallelExecutor`.
pub struct RangeProductReducer<E = RayonExecutor> {
    executor: E,
}

impl RangeProductReducer<RayonExecutor> {
    /// Create a reducer backed by a rayon pool sized to the machine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_executor(RayonExecutor::default())
    }
}

impl Default for RangeProductReducer<RayonExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ParallelExecutor> RangeProductReducer<E> {
    /// Create a reducer over the given executor.
    #[must_use]
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// The executor running chunk tasks.
    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Compute `n!` using `workers` chunks.
    pub fn product(&self, n: u64, workers: usize) -> Result<BigUint, FactorialError> {
        if n <= 1 {
            return Ok(BigUint::one());
        }

        let tasks: Vec<_> = partition(n, workers)
            .into_iter()
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| move || Ok::<_, FactorialError>(chunk.product()))
            .collect();

        debug!(
            n,
            workers,
            tasks = tasks.len(),
            executor = self.executor.name(),
            "dispatching chunk products"
        );

        let partials = self.executor.execute(tasks)?;
        Ok(combine(partials))
    }
}

/// Multiply partial products left to right, seeded at 1.
#[must_use]
pub fn combine<I>(partials: I) -> BigUint
where
    I: IntoIterator<Item = BigUint>,
{
    partials
        .into_iter()
        .fold(BigUint::one(), |acc, partial| acc * partial)
}

impl<E: ParallelExecutor> Calculator for RangeProductReducer<E> {
    fn calculate(&self, n: u64, opts: &Options) -> Result<FactorialValue, FactorialError> {
        self.product(n, opts.resolve_workers())
            .map(FactorialValue::Exact)
    }

    fn name(&self) -> &'static str {
        "RangeProduct"
    }
}
