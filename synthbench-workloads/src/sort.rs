//! Sorting workload.

use rand::Rng;
use synthbench_core::{Bencher, SuiteContext};

/// Build `len` random values in `1..=max_value`
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, max_value: u32) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(1..=max_value)).collect()
}

/// Sort in place, ascending, with the standard comparison sort
pub fn sort_sequence(values: &mut [u32]) {
    values.sort();
}

/// Generate the sequence untimed, then time sorting it; returns the sorted values
fn timed_sort(b: &mut Bencher, ctx: &SuiteContext) -> Vec<u32> {
    let config = ctx.config();
    let mut rng = ctx.rng(b.stream());

    b.iter_with_setup(
        || random_sequence(&mut rng, config.sort_len, config.sort_max_value),
        |mut values| {
            sort_sequence(&mut values);
            values
        },
    )
}

pub(crate) fn run(b: &mut Bencher, ctx: &SuiteContext) {
    timed_sort(b, ctx);
}
