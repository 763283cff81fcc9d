//! Wall-Clock Timing
//!
//! Each workload is measured exactly once, so a monotonic wall clock is all
//! that is needed. `Timer` wraps [`std::time::Instant`] and yields a
//! [`Duration`], which is non-negative by construction.

use std::time::{Duration, Instant};

/// Timer for measuring a single workload execution
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed wall-clock time since [`Timer::start`]
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Run `f` once, returning its output together with the elapsed time.
///
/// The output passes through [`std::hint::black_box`] so the optimizer cannot
/// discard the measured work.
#[inline]
pub fn time<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let timer = Timer::start();
    let output = std::hint::black_box(f());
    (output, timer.stop())
}
