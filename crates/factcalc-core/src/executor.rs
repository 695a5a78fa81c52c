//! Parallel executors: run independent tasks and return results in order.
//!
//! The exact path hands one task per chunk to a `ParallelExecutor`.
//! Implementations must return results in submission order and fail the
//! whole batch when any task fails.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPoolBuilder;

use crate::calculator::FactorialError;
use crate::constants::DEFAULT_WORKER_FALLBACK;

/// Capability to run a batch of independent tasks.
pub trait ParallelExecutor: Send + Sync {
    /// Run every task, returning their results in submission order or the
    /// first error encountered.
    fn execute<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>, FactorialError>
    where
        T: Send,
        F: FnOnce() -> Result<T, FactorialError> + Send;

    /// Get the name of this executor.
    fn name(&self) -> &str;
}

/// Available hardware parallelism, or the fallback when unknown.
#[must_use]
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(DEFAULT_WORKER_FALLBACK)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_string()
    }
}

/// Run a task, turning a panic into a `ComputationFailure`.
fn run_guarded<T, F>(task: F) -> Result<T, FactorialError>
where
    F: FnOnce() -> Result<T, FactorialError>,
{
    panic::catch_unwind(AssertUnwindSafe(task)).unwrap_or_else(|payload| {
        Err(FactorialError::ComputationFailure(format!(
            "task panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

/// Executor backed by a dedicated rayon thread pool built per batch.
pub struct RayonExecutor {
    threads: usize,
}

impl RayonExecutor {
    /// Create an executor whose pool has `threads` threads (0 = available parallelism).
    #[must_use]
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ParallelExecutor for RayonExecutor {
    fn execute<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>, FactorialError>
    where
        T: Send,
        F: FnOnce() -> Result<T, FactorialError> + Send,
    {
        let threads = if self.threads == 0 {
            available_workers()
        } else {
            self.threads
        };
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| {
                FactorialError::ComputationFailure(format!("failed to create thread pool: {e}"))
            })?;

        let results: Vec<Result<T, FactorialError>> = pool.install(|| {
            use rayon::iter::{IntoParallelIterator, ParallelIterator};
            tasks.into_par_iter().map(run_guarded).collect()
        });

        results.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "Rayon"
    }
}

/// Executor that spawns one scoped OS thread per task.
pub struct ScopedThreadExecutor;

impl ScopedThreadExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScopedThreadExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelExecutor for ScopedThreadExecutor {
    fn execute<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>, FactorialError>
    where
        T: Send,
        F: FnOnce() -> Result<T, FactorialError> + Send,
    {
        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = tasks
                .into_iter()
                .map(|task| scope.spawn(move |_| task()))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|payload| {
                        Err(FactorialError::ComputationFailure(format!(
                            "worker thread panicked: {}",
                            panic_message(payload.as_ref())
                        )))
                    })
                })
                .collect::<Vec<_>>()
        })
        .map_err(|payload| {
            FactorialError::ComputationFailure(format!(
                "worker scope failed: {}",
                panic_message(payload.as_ref())
            ))
        })?;

        joined.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "ScopedThreads"
    }
}

/// Executor that runs every task inline on the calling thread.
pub struct SequentialExecutor;

impl SequentialExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelExecutor for SequentialExecutor {
    fn execute<T, F>(&self, tasks: Vec<F>) -> Result<Vec<T>, FactorialError>
    where
        T: Send,
        F: FnOnce() -> Result<T, FactorialError> + Send,
    {
        tasks.into_iter().map(run_guarded).collect()
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
