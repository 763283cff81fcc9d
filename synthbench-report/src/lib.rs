#![warn(missing_docs)]
//! SynthBench Report - Results and Output Formatting

mod human;
mod report;

pub use human::{BANNER, format_human_output, format_result_line};
pub use report::{Report, WorkloadTiming};
