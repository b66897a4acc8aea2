//! Client state: counters and message ring.

use crate::{config::DEFAULT_CAPACITY, ring::MessageRing};

/// Mutable state owned by a [`Client`](crate::Client).
///
/// `in_count` only ever grows and `out_count` only ever shrinks, both by one
/// per diagnostic step, so `in_count + out_count == 0` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    in_count: i32,
    out_count: i32,
    ring: MessageRing,
}

impl ClientState {
    /// Fresh state with the default ring of ten zeroed slots.
    pub fn initialize() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Fresh state with a ring of `capacity` zeroed slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { in_count: 0, out_count: 0, ring: MessageRing::new(capacity) }
    }

    /// Increment counter.
    pub fn in_count(&self) -> i32 {
        self.in_count
    }

    /// Decrement counter.
    pub fn out_count(&self) -> i32 {
        self.out_count
    }

    /// Message ring.
    pub fn ring(&self) -> &MessageRing {
        &self.ring
    }

    /// Next write position in the ring.
    pub fn index(&self) -> usize {
        self.ring.index()
    }

    /// Ring contents.
    pub fn buffer(&self) -> &[i32] {
        self.ring.slots()
    }

    pub(crate) fn ring_mut(&mut self) -> &mut MessageRing {
        &mut self.ring
    }

    pub(crate) fn bump_counters(&mut self) {
        self.in_count = self.in_count.wrapping_add(1);
        self.out_count = self.out_count.wrapping_sub(1);
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::initialize()
    }
}
