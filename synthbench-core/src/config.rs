//! Suite Configuration
//!
//! Sizes of every workload. The binary always runs [`SuiteConfig::default`];
//! nothing is read from flags, files or the environment. Smaller
//! configurations exist for tests.

use crate::error::ConfigError;

/// Workload sizes for one suite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Length of the sequence to sort
    pub sort_len: usize,
    /// Largest value in the sort sequence (values start at 1)
    pub sort_max_value: u32,
    /// Add/subtract rounds in the CPU calculation
    pub cpu_iterations: u64,
    /// Times the sentence is appended in the string workload
    pub string_repeats: usize,
    /// Fill/clear rounds in the array workload
    pub array_rounds: usize,
    /// Elements appended per array round
    pub array_len: usize,
    /// Rounds of the sqrt+sin workload
    pub math_rounds: usize,
    /// Values evaluated per sqrt+sin round
    pub math_values: u32,
    /// Entries inserted into the map before clearing
    pub map_entries: u32,
    /// Upper bound (inclusive) of the XOR accumulation
    pub bitwise_upper: u64,
    /// Side length of the square matrices
    pub matrix_dim: usize,
    /// Outer loop count of the algorithm simulation
    pub simulation_outer: u64,
    /// Inner loop count of the algorithm simulation
    pub simulation_inner: i64,
    /// Concurrent tasks in the parallel workload
    pub parallel_tasks: usize,
    /// Worker threads in the shared pool (`None` = available parallelism)
    pub worker_threads: Option<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sort_len: 2_000_000,
            sort_max_value: 100_000,
            cpu_iterations: 2_000_000,
            string_repeats: 200_000,
            array_rounds: 500,
            array_len: 2_000,
            math_rounds: 100,
            math_values: 10_000,
            map_entries: 50_000,
            bitwise_upper: 1_000_000,
            matrix_dim: 500,
            simulation_outer: 10_000,
            simulation_inner: 1_000,
            parallel_tasks: 10,
            worker_threads: None,
        }
    }
}

impl SuiteConfig {
    /// Check that every workload has something to do.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("sort_max_value", self.sort_max_value as u64),
            ("matrix_dim", self.matrix_dim as u64),
            ("parallel_tasks", self.parallel_tasks as u64),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }
        if self.worker_threads == Some(0) {
            return Err(ConfigError::Zero {
                field: "worker_threads",
            });
        }
        Ok(())
    }
}
