#![warn(missing_docs)]
//! # SynthBench
//!
//! A fixed sequence of CPU and memory micro-benchmarks, each timed once with
//! the wall clock:
//! - **Sorting** of a 2,000,000-element random sequence
//! - **Scalar arithmetic**: random add/subtract, XOR accumulation, a nested-loop simulation, sqrt+sin sweeps
//! - **Containers**: string concatenation, vector and map churn
//! - **Matrix product**: 500×500 `f64` GEMM
//! - **Hashing**: SHA-256 of a constant string
//! - **Parallel fan-out**: 10 tasks on a shared rayon pool behind a single barrier
//!
//! There is no warmup, no repetition and no statistics; the suite reports one
//! duration per workload.
//!
//! ## Running a custom-sized suite
//!
//! ```ignore
//! use synthbench::{RngSource, SuiteConfig, SuiteContext, run_suite, suite};
//!
//! let ctx = SuiteContext::new(SuiteConfig::default(), RngSource::Seeded(7))?;
//! let report = run_suite(&ctx, suite(), &mut std::io::stdout())?;
//! ```

// Re-export core types
pub use synthbench_core::{
    Bencher, ConfigError, RngSource, SuiteConfig, SuiteContext, SuiteError, WorkloadDef,
    WorkloadRng, WorkloadRun, default_worker_threads,
};

// Re-export workloads
pub use synthbench_workloads::{
    Churn, HASH_INPUT, SENTENCE, algorithm_simulation, array_churn, bitwise_xor, complex_math,
    cpu_calculation, map_churn, matrix_multiply, operands, parallel_fan_out, random_sequence,
    sha256_hex, sort_sequence, string_concatenation, suite,
};

// Re-export report types
pub use synthbench_report::{
    BANNER, Report, WorkloadTiming, format_human_output, format_result_line,
};

/// Run the SynthBench CLI.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     synthbench::run()
/// }
/// ```
pub use synthbench_cli::{Executor, run, run_suite};
