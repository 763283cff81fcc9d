//! Scalar arithmetic workloads: random add/subtract, XOR accumulation,
//! the nested-loop simulation and the sqrt+sin sweep.

use rand::Rng;
use std::hint::black_box;
use synthbench_core::{Bencher, SuiteContext};

/// `iterations` rounds of `acc += rand(1..=100); acc -= rand(1..=100)`
pub fn cpu_calculation<R: Rng + ?Sized>(rng: &mut R, iterations: u64) -> i64 {
    let mut acc = 0i64;
    for _ in 0..iterations {
        acc += rng.gen_range(1..=100i64);
        acc -= rng.gen_range(1..=100i64);
    }
    acc
}

/// XOR of every integer in `1..=upper`
pub fn bitwise_xor(upper: u64) -> u64 {
    let mut acc = 0u64;
    for i in 1..=upper {
        acc ^= i;
    }
    acc
}

/// Nested loop accumulating `i² · rand(0..100)` for `i` in `1..=inner`
pub fn algorithm_simulation<R: Rng + ?Sized>(rng: &mut R, outer: u64, inner: i64) -> i64 {
    let mut acc = 0i64;
    for _ in 0..outer {
        for i in 1..=inner {
            acc += i * i * rng.gen_range(0..100i64);
        }
    }
    acc
}

/// `rounds` sweeps of `sqrt(v) + sin(v)` over `1..=values`.
///
/// Returns the sum of the last sweep.
pub fn complex_math(rounds: usize, values: u32) -> f64 {
    let mut last = 0.0;
    for _ in 0..rounds {
        let sweep: Vec<f64> = (1..=values)
            .map(|v| {
                let v = f64::from(v);
                v.sqrt() + v.sin()
            })
            .collect();
        last = black_box(sweep).iter().sum();
    }
    last
}

pub(crate) fn run_cpu(b: &mut Bencher, ctx: &SuiteContext) {
    let mut rng = ctx.rng(b.stream());
    let iterations = ctx.config().cpu_iterations;
    b.iter(|| cpu_calculation(&mut rng, iterations));
}

pub(crate) fn run_complex_math(b: &mut Bencher, ctx: &SuiteContext) {
    let config = ctx.config();
    b.iter(|| complex_math(config.math_rounds, config.math_values));
}

pub(crate) fn run_bitwise(b: &mut Bencher, ctx: &SuiteContext) {
    let upper = ctx.config().bitwise_upper;
    b.iter(|| bitwise_xor(black_box(upper)));
}

pub(crate) fn run_algorithm(b: &mut Bencher, ctx: &SuiteContext) {
    let mut rng = ctx.rng(b.stream());
    let config = ctx.config();
    b.iter(|| algorithm_simulation(&mut rng, config.simulation_outer, config.simulation_inner));
}
