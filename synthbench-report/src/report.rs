//! Report Data Structures

use std::time::Duration;

/// Complete suite report, results in run order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// One entry per workload
    pub results: Vec<WorkloadTiming>,
    /// Wall-clock time of the whole run, including untimed setup
    pub total: Duration,
}

/// Timing of a single workload
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadTiming {
    /// Workload identifier
    pub id: String,
    /// Label printed in the results block
    pub label: String,
    /// Measured wall-clock duration
    pub elapsed: Duration,
}

impl WorkloadTiming {
    /// Create a timing entry
    pub fn new(id: impl Into<String>, label: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            elapsed,
        }
    }

    /// Elapsed time in seconds; finite and non-negative
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Report {
    /// Append a workload result
    pub fn push(&mut self, timing: WorkloadTiming) {
        self.results.push(timing);
    }

    /// Sum of all measured workload durations
    pub fn measured(&self) -> Duration {
        self.results.iter().map(|t| t.elapsed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        let timing = WorkloadTiming::new("sort", "Sorting", Duration::from_millis(1500));
        assert_eq!(timing.seconds(), 1.5);
    }

    #[test]
    fn test_report_order_and_sum() {
        let mut report = Report::default();
        report.push(WorkloadTiming::new("a", "A", Duration::from_millis(10)));
        report.push(WorkloadTiming::new("b", "B", Duration::from_millis(20)));

        let labels: Vec<_> = report.results.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(report.measured(), Duration::from_millis(30));
    }
}
