//! Fixed-size worker pool for batch fan-out
//!
//! One task per index; each task writes only its own slot of a pre-sized
//! result buffer, so output order never depends on completion order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Dedicated rayon pool with a fixed number of threads
#[derive(Debug)]
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Start a pool with `workers` threads (at least one)
    pub fn new(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("fuzzbench-worker-{}", idx))
            .build()?;

        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task(i)` for every `i in 0..len` on the pool.
    ///
    /// The result of `task(i)` always lands at index `i`.
    pub fn run_indexed<T, F>(&self, len: usize, task: F) -> Vec<T>
    where
        T: Default + Send,
        F: Fn(usize) -> T + Sync,
    {
        let mut slots: Vec<T> = Vec::with_capacity(len);
        slots.resize_with(len, T::default);

        self.pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .for_each(|(idx, slot)| *slot = task(idx));
        });

        slots
    }
}
