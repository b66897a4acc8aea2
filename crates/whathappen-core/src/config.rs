//! Engine configuration.

use crate::juggle::Seed;

/// Number of slots in the message ring.
pub const DEFAULT_CAPACITY: usize = 10;

/// Upper bound on juggling iterations per call.
///
/// Only reachable with non-reference seeds; the reference seed stops after a
/// single iteration.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Message ring capacity. Zero is allowed and makes the ring empty.
    pub capacity: usize,
    /// Initial working values of the juggling loop.
    pub seed: Seed,
    /// Maximum iterations of the juggling loop per call.
    pub max_iterations: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: Seed::REFERENCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
