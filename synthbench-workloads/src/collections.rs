//! Container churn workloads: fill then clear a vector, fill then clear a map.

use rand::Rng;
use std::collections::HashMap;
use std::hint::black_box;
use synthbench_core::{Bencher, SuiteContext};

/// Final container state of a churn workload
#[derive(Debug, Clone, PartialEq)]
pub struct Churn<C> {
    /// Largest length the container reached
    pub peak_len: usize,
    /// Container after the last clear
    pub container: C,
}

/// `rounds` times: append `len` random values in `1..=100`, then clear
pub fn array_churn<R: Rng + ?Sized>(rng: &mut R, rounds: usize, len: usize) -> Churn<Vec<u32>> {
    let mut values = Vec::new();
    let mut peak_len = 0;
    for _ in 0..rounds {
        values.extend((0..len).map(|_| rng.gen_range(1..=100u32)));
        peak_len = peak_len.max(black_box(&values).len());
        values.clear();
    }
    Churn {
        peak_len,
        container: values,
    }
}

/// Insert `key -> "Value{key}"` for `key` in `1..=entries`, then clear
pub fn map_churn(entries: u32) -> Churn<HashMap<u32, String>> {
    let mut map = HashMap::new();
    for key in 1..=entries {
        map.insert(key, format!("Value{}", key));
    }
    let peak_len = black_box(&map).len();
    map.clear();
    Churn {
        peak_len,
        container: map,
    }
}

pub(crate) fn run_array(b: &mut Bencher, ctx: &SuiteContext) {
    let mut rng = ctx.rng(b.stream());
    let config = ctx.config();
    b.iter(|| array_churn(&mut rng, config.array_rounds, config.array_len));
}

pub(crate) fn run_map(b: &mut Bencher, ctx: &SuiteContext) {
    let entries = ctx.config().map_entries;
    b.iter(|| map_churn(entries));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_array_churn_ends_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let churn = array_churn(&mut rng, 20, 2_000);

        assert!(churn.container.is_empty());
        assert_eq!(churn.peak_len, 2_000);
    }

    #[test]
    fn test_array_churn_zero_rounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let churn = array_churn(&mut rng, 0, 2_000);
        assert_eq!(churn.peak_len, 0);
    }

    #[test]
    fn test_map_churn_ends_empty() {
        let churn = map_churn(50_000);

        assert!(churn.container.is_empty());
        assert_eq!(churn.peak_len, 50_000);
    }
}
