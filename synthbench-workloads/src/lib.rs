#![warn(missing_docs)]
//! SynthBench Workloads
//!
//! The eleven workloads and the fixed order they run in. Each workload is a
//! plain function returning its result (so it can be checked directly) plus a
//! crate-private runner that times it through a [`Bencher`](synthbench_core::Bencher).

mod arithmetic;
mod collections;
mod hash;
mod matrix;
mod parallel;
mod sort;
mod text;

pub use arithmetic::{algorithm_simulation, bitwise_xor, complex_math, cpu_calculation};
pub use collections::{Churn, array_churn, map_churn};
pub use hash::{HASH_INPUT, sha256_hex};
pub use matrix::{matrix_multiply, operands};
pub use parallel::parallel_fan_out;
pub use sort::{random_sequence, sort_sequence};
pub use text::{SENTENCE, string_concatenation};

use synthbench_core::WorkloadDef;

static SUITE: [WorkloadDef; 11] = [
    WorkloadDef {
        id: "sort",
        label: "Sorting",
        runner_fn: sort::run,
    },
    WorkloadDef {
        id: "cpu",
        label: "Calculations",
        runner_fn: arithmetic::run_cpu,
    },
    WorkloadDef {
        id: "string",
        label: "String manipulation",
        runner_fn: text::run,
    },
    WorkloadDef {
        id: "array",
        label: "Array manipulation",
        runner_fn: collections::run_array,
    },
    WorkloadDef {
        id: "complex_math",
        label: "Complex calculations",
        runner_fn: arithmetic::run_complex_math,
    },
    WorkloadDef {
        id: "map",
        label: "Dictionary manipulation",
        runner_fn: collections::run_map,
    },
    WorkloadDef {
        id: "bitwise",
        label: "Bitwise operations",
        runner_fn: arithmetic::run_bitwise,
    },
    WorkloadDef {
        id: "matrix",
        label: "Matrix operations",
        runner_fn: matrix::run,
    },
    WorkloadDef {
        id: "algorithm",
        label: "Advanced algorithm simulation",
        runner_fn: arithmetic::run_algorithm,
    },
    WorkloadDef {
        id: "hash",
        label: "Cryptographic hash function",
        runner_fn: hash::run,
    },
    WorkloadDef {
        id: "parallel",
        label: "Parallel processing",
        runner_fn: parallel::run,
    },
];

/// All workloads in run order
pub fn suite() -> &'static [WorkloadDef] {
    &SUITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use synthbench_core::{RngSource, SuiteConfig, SuiteContext};

    fn tiny_context() -> SuiteContext {
        let config = SuiteConfig {
            sort_len: 1_000,
            cpu_iterations: 1_000,
            string_repeats: 10,
            array_rounds: 2,
            array_len: 10,
            math_rounds: 2,
            math_values: 10,
            map_entries: 10,
            bitwise_upper: 100,
            matrix_dim: 8,
            simulation_outer: 2,
            simulation_inner: 10,
            parallel_tasks: 10,
            worker_threads: Some(2),
            ..SuiteConfig::default()
        };
        SuiteContext::new(config, RngSource::Seeded(99)).unwrap()
    }

    #[test]
    fn test_suite_order() {
        let ids: Vec<_> = suite().iter().map(|w| w.id).collect();
        assert_eq!(
            ids,
            vec![
                "sort",
                "cpu",
                "string",
                "array",
                "complex_math",
                "map",
                "bitwise",
                "matrix",
                "algorithm",
                "hash",
                "parallel",
            ]
        );
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = suite().iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), suite().len());
    }

    #[test]
    fn test_every_runner_times_its_work() {
        let ctx = tiny_context();
        for (stream, def) in suite().iter().enumerate() {
            let run = def.run(stream as u64, &ctx);
            assert!(run.elapsed.as_secs_f64().is_finite(), "{}", def.id);
        }
    }

    #[test]
    fn test_only_hash_emits_notes() {
        let ctx = tiny_context();
        for (stream, def) in suite().iter().enumerate() {
            let run = def.run(stream as u64, &ctx);
            if def.id == "hash" {
                assert_eq!(
                    run.notes,
                    vec![format!("Hash: {}", sha256_hex(HASH_INPUT.as_bytes()))]
                );
            } else {
                assert!(run.notes.is_empty(), "{}", def.id);
            }
        }
    }
}
