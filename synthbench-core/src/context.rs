//! Suite Context
//!
//! Everything a workload runner may need beyond its own [`Bencher`](crate::Bencher):
//! the sizes to run, the random source, and the shared worker pool.

use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::rng::{RngSource, WorkloadRng};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;

/// One worker per available core, or a single worker if that is unknown
pub fn default_worker_threads() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Shared, read-only state for one suite run
#[derive(Debug)]
pub struct SuiteContext {
    config: SuiteConfig,
    rng: RngSource,
    pool: ThreadPool,
}

impl SuiteContext {
    /// Validate `config` and build the worker pool.
    pub fn new(config: SuiteConfig, rng: RngSource) -> Result<Self, SuiteError> {
        config.validate()?;

        // Sized here rather than passing 0, which would let rayon read RAYON_NUM_THREADS
        let threads = config.worker_threads.unwrap_or_else(default_worker_threads);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("synthbench-worker-{}", i))
            .build()?;

        Ok(Self { config, rng, pool })
    }

    /// Workload sizes
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Random source all streams derive from
    pub fn rng_source(&self) -> RngSource {
        self.rng
    }

    /// Generator for stream `stream`
    pub fn rng(&self, stream: u64) -> WorkloadRng {
        self.rng.stream(stream)
    }

    /// Shared worker pool
    pub fn pool(&self) -> &ThreadPool {
        &self.pool
    }
}
