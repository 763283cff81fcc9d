//! String concatenation workload.

use synthbench_core::{Bencher, SuiteContext};

/// Sentence appended on every round
pub const SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";

/// Append [`SENTENCE`] `repeats` times to an initially empty buffer
pub fn string_concatenation(repeats: usize) -> String {
    let mut buffer = String::new();
    for _ in 0..repeats {
        buffer.push_str(SENTENCE);
    }
    buffer
}

pub(crate) fn run(b: &mut Bencher, ctx: &SuiteContext) {
    let repeats = ctx.config().string_repeats;
    b.iter(|| string_concatenation(repeats));
}
