//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, Dispatcher, FactorialError};
use crate::executor::{ParallelExecutor, RayonExecutor, ScopedThreadExecutor, SequentialExecutor};
use crate::reducer::RangeProductReducer;
use crate::stirling::StirlingEstimator;

/// Executor backing the exact path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutorKind {
    /// Dedicated rayon thread pool.
    #[default]
    Rayon,
    /// One scoped OS thread per chunk.
    Threads,
    /// Inline on the calling thread.
    Sequential,
}

impl ExecutorKind {
    /// Parse an executor name.
    pub fn from_name(name: &str) -> Result<Self, FactorialError> {
        match name {
            "rayon" => Ok(Self::Rayon),
            "threads" => Ok(Self::Threads),
            "sequential" => Ok(Self::Sequential),
            _ => Err(FactorialError::Config(format!("unknown executor: {name}"))),
        }
    }
}

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FactorialError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    executor: ExecutorKind,
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a factory whose exact calculators run on rayon.
    #[must_use]
    pub fn new() -> Self {
        Self::with_executor(ExecutorKind::default())
    }

    /// Create a factory whose exact calculators run on `executor`.
    #[must_use]
    pub fn with_executor(executor: ExecutorKind) -> Self {
        Self {
            executor,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn exact_calculator(&self) -> Arc<dyn Calculator> {
        fn boxed<E: ParallelExecutor + 'static>(executor: E) -> Arc<dyn Calculator> {
            Arc::new(RangeProductReducer::with_executor(executor))
        }
        match self.executor {
            ExecutorKind::Rayon => boxed(RayonExecutor::default()),
            ExecutorKind::Threads => boxed(ScopedThreadExecutor::new()),
            ExecutorKind::Sequential => boxed(SequentialExecutor::new()),
        }
    }

    fn create_calculator(&self, name: &str) -> Result<Arc<dyn Calculator>, FactorialError> {
        match name {
            "auto" => Ok(Arc::new(Dispatcher::new(
                self.exact_calculator(),
                Arc::new(StirlingEstimator::new()),
            ))),
            "exact" => Ok(self.exact_calculator()),
            "stirling" => Ok(Arc::new(StirlingEstimator::new())),
            _ => Err(FactorialError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FactorialError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = self.create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["auto", "exact", "stirling"]
    }
}
