#![warn(missing_docs)]
//! SynthBench Core - Measurement Runtime
//!
//! This crate provides the execution environment for workloads:
//! - `Bencher` for single-shot wall-clock measurement
//! - `RngSource` for injectable, optionally seeded randomness
//! - `SuiteConfig` and `SuiteContext` carrying sizes and the shared thread pool
//! - `WorkloadDef`, the entry type of the ordered suite table

mod bencher;
mod config;
mod context;
mod error;
mod measure;
mod rng;

pub use bencher::{Bencher, WorkloadRun};
pub use config::SuiteConfig;
pub use context::{SuiteContext, default_worker_threads};
pub use error::{ConfigError, SuiteError};
pub use rng::{RngSource, TASK_STREAM_BASE, WorkloadRng};

/// One entry in the suite table
#[derive(Debug, Clone, Copy)]
pub struct WorkloadDef {
    /// Unique identifier (used in logs)
    pub id: &'static str,
    /// Label printed in the results block
    pub label: &'static str,
    /// Function that performs and times the workload
    pub runner_fn: fn(&mut Bencher, &SuiteContext),
}

impl WorkloadDef {
    /// Run this workload once with a fresh [`Bencher`] on stream `stream`
    pub fn run(&self, stream: u64, ctx: &SuiteContext) -> WorkloadRun {
        let mut bencher = Bencher::new(stream);
        (self.runner_fn)(&mut bencher, ctx);
        bencher.finish()
    }
}
