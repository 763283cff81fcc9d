//! Bencher - The Workload Measurement API
//!
//! Unlike a statistical harness there is no warmup and no sampling: a workload
//! calls [`Bencher::iter`] (or [`Bencher::iter_with_setup`]) and the wall-clock
//! time of that single execution is its result.

use crate::measure::time;
use std::time::Duration;

/// Outcome of running one workload through a [`Bencher`]
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadRun {
    /// Total measured wall-clock time
    pub elapsed: Duration,
    /// Extra output lines the workload produced, in emission order
    pub notes: Vec<String>,
}

/// Single-shot measurement handle passed to every workload runner.
#[derive(Debug, Default)]
pub struct Bencher {
    stream: u64,
    elapsed: Option<Duration>,
    notes: Vec<String>,
}

impl Bencher {
    /// Create a Bencher whose workload draws from random stream `stream`
    pub fn new(stream: u64) -> Self {
        Self {
            stream,
            elapsed: None,
            notes: Vec::new(),
        }
    }

    /// Random stream assigned to this workload
    pub fn stream(&self) -> u64 {
        self.stream
    }

    /// Time one execution of `f` and return its output.
    ///
    /// Calling this more than once adds the measurements together.
    #[inline]
    pub fn iter<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let (output, elapsed) = time(f);
        self.record(elapsed);
        output
    }

    /// Run `setup` untimed, then time `routine` on its output
    #[inline]
    pub fn iter_with_setup<I, S, F, R>(&mut self, setup: S, routine: F) -> R
    where
        S: FnOnce() -> I,
        F: FnOnce(I) -> R,
    {
        let input = setup();

        let (output, elapsed) = time(|| routine(input));
        self.record(elapsed);
        output
    }

    /// Record an extra line of output to print once the workload returns
    pub fn note(&mut self, line: impl Into<String>) {
        self.notes.push(line.into());
    }

    /// Measured time so far, `None` if nothing was timed yet
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    fn record(&mut self, duration: Duration) {
        self.elapsed = Some(self.elapsed.unwrap_or_default() + duration);
    }

    /// Finalize and return the measurement
    pub fn finish(self) -> WorkloadRun {
        WorkloadRun {
            elapsed: self.elapsed.unwrap_or_default(),
            notes: self.notes,
        }
    }
}
