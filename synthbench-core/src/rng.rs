//! Random Sources
//!
//! Workloads never reach for a global generator. They ask the suite for a
//! numbered stream, which is either freshly seeded from OS entropy or derived
//! deterministically from a single seed.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generator type handed to workloads
pub type WorkloadRng = StdRng;

/// Stream numbers at or above this value belong to parallel sub-tasks
pub const TASK_STREAM_BASE: u64 = 1 << 32;

// Odd 64-bit golden-ratio constant; spreads neighbouring stream ids apart.
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where workload randomness comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngSource {
    /// Every stream is seeded from OS entropy (non-reproducible)
    #[default]
    Entropy,
    /// Every stream is derived from this seed (reproducible)
    Seeded(u64),
}

impl RngSource {
    /// Build the generator for stream `stream`
    pub fn stream(&self, stream: u64) -> WorkloadRng {
        match *self {
            RngSource::Entropy => StdRng::from_entropy(),
            RngSource::Seeded(seed) => {
                StdRng::seed_from_u64(seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_STRIDE))
            }
        }
    }

    /// Stream for parallel sub-task `task`
    pub fn task_stream(&self, task: u64) -> WorkloadRng {
        self.stream(TASK_STREAM_BASE + task)
    }

    /// Whether results drawn from this source are reproducible
    pub fn is_deterministic(&self) -> bool {
        matches!(self, RngSource::Seeded(_))
    }
}
