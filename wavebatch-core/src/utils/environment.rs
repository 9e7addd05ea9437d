#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{GenericResult, ThreadPool, parallel_collect};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how data parallel parts of the algorithm are executed.
#[derive(Clone, Default)]
pub struct Parallelism {
    thread_pool: Option<Arc<ThreadPool>>,
}

impl Parallelism {
    /// Creates a parallelism which runs everything on the calling thread.
    pub fn sequential() -> Self {
        Self { thread_pool: None }
    }

    /// Creates a parallelism backed by a dedicated thread pool with the given amount of threads.
    /// One thread means sequential execution.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        if num_threads <= 1 {
            return Ok(Self::sequential());
        }

        Ok(Self { thread_pool: Some(Arc::new(ThreadPool::new(num_threads)?)) })
    }

    /// Returns true if work is distributed across multiple threads.
    pub fn is_parallel(&self) -> bool {
        self.thread_pool.is_some()
    }

    /// Maps every item of the source, preserving the source order in the result.
    pub fn collect<T, F, R>(&self, source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(thread_pool) => thread_pool.execute(|| parallel_collect(source, map_op)),
            None => source.iter().map(map_op).collect(),
        }
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Parallelism settings.
    pub parallelism: Parallelism,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, parallelism: Parallelism) -> Self {
        Self { logger, parallelism }
    }

    /// Creates an environment which discards all log messages and runs sequentially.
    pub fn silent() -> Self {
        Self::new(Arc::new(|_: &str| {}), Parallelism::sequential())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")), Parallelism::sequential())
    }
}
