//! Parallel fan-out workload.
//!
//! Tasks are spawned into a rayon scope on the shared pool. The scope does
//! not return until every spawned task has finished, which is the barrier.

use crate::arithmetic::cpu_calculation;
use rayon::ThreadPool;
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use synthbench_core::{Bencher, RngSource, SuiteContext};

/// Run `tasks` independent CPU calculations of `iterations` rounds each on
/// `pool`, blocking until all complete.
///
/// Returns the number of tasks that finished before the barrier released.
pub fn parallel_fan_out(pool: &ThreadPool, rng: RngSource, tasks: usize, iterations: u64) -> usize {
    let completed = AtomicUsize::new(0);

    pool.scope(|scope| {
        for task in 0..tasks {
            let completed = &completed;
            scope.spawn(move |_| {
                let mut task_rng = rng.task_stream(task as u64);
                black_box(cpu_calculation(&mut task_rng, iterations));
                completed.fetch_add(1, Ordering::Release);
            });
        }
    });

    completed.load(Ordering::Acquire)
}

pub(crate) fn run(b: &mut Bencher, ctx: &SuiteContext) {
    let config = ctx.config();
    b.iter(|| {
        parallel_fan_out(
            ctx.pool(),
            ctx.rng_source(),
            config.parallel_tasks,
            config.cpu_iterations,
        )
    });
}
