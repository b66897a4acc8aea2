//! Fixed-capacity circular message log.
//!
//! The write index advances after every stored value. Once it reaches the
//! capacity, the next record resets it to 0 and stores nothing, so slot 0 is
//! only overwritten on the call after the reset.

/// Effect of a single [`MessageRing::record`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingWrite {
    /// Value stored and the index advanced.
    Written {
        /// Slot that received the value.
        slot: usize,
    },
    /// Index was at capacity and has been reset to 0. Nothing was stored.
    Reset,
}

/// Circular log of integers with a fixed number of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRing {
    slots: Box<[i32]>,
    index: usize,
}

impl MessageRing {
    /// Create a ring of `capacity` zeroed slots with the index at 0.
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![0; capacity].into_boxed_slice(), index: 0 }
    }

    /// Number of slots. Never changes after construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot count as a 32-bit length, saturating at `i32::MAX`.
    pub fn length(&self) -> i32 {
        i32::try_from(self.slots.len()).unwrap_or(i32::MAX)
    }

    /// Next write position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// All slots in order.
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// `true` when the ring has no slots.
    pub fn is_empty(&self) -> bool {
        let has_slots = 0 < self.length();
        !has_slots
    }

    /// Store `value` at the current index, or reset the index if it has
    /// reached capacity.
    pub fn record(&mut self, value: i32) -> RingWrite {
        let slot = self.index;
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = value;
            self.index += 1;
            RingWrite::Written { slot }
        } else {
            self.index = 0;
            RingWrite::Reset
        }
    }
}
