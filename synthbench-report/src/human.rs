//! Human-readable output.
//!
//! One line per workload: `<Label> completed in <seconds> seconds`.

use crate::report::{Report, WorkloadTiming};

/// First line printed by every run
pub const BANNER: &str = "Beginning benchmark...";

/// Format a single result line (without trailing newline)
pub fn format_result_line(timing: &WorkloadTiming) -> String {
    format!("{} completed in {} seconds", timing.label, timing.seconds())
}

/// Format the results block, one newline-terminated line per workload
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    for timing in &report.results {
        output.push_str(&format_result_line(timing));
        output.push('\n');
    }
    output
}
