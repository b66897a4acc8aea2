//! Standard invariant checks.
//!
//! These capture what must be true of the engine after any operation.

use super::{ClientSnapshot, Invariant, InvariantResult, Violation};

/// Counters move in lockstep in opposite directions.
///
/// Every diagnostic step adds one to `in` and subtracts one from `out`, so
/// their sum stays zero.
pub struct CounterBalance;

impl Invariant for CounterBalance {
    fn name(&self) -> &'static str {
        "counter_balance"
    }

    fn check(&self, state: &ClientSnapshot) -> InvariantResult {
        if state.in_count.wrapping_add(state.out_count) != 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("in {} and out {} do not cancel", state.in_count, state.out_count),
            });
        }
        Ok(())
    }
}

/// The increment counter equals the number of diagnostics emitted.
///
/// A mismatch means a diagnostic was lost or a counter moved without one.
pub struct CounterMatchesDiagnostics;

impl Invariant for CounterMatchesDiagnostics {
    fn name(&self) -> &'static str {
        "counter_matches_diagnostics"
    }

    fn check(&self, state: &ClientSnapshot) -> InvariantResult {
        if i64::from(state.in_count) != state.diagnostics as i64 {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "in is {} but {} diagnostics were emitted",
                    state.in_count, state.diagnostics
                ),
            });
        }
        Ok(())
    }
}

/// The write index never exceeds the ring capacity.
///
/// It may equal the capacity, in which case the next record resets it.
pub struct IndexInBounds;

impl Invariant for IndexInBounds {
    fn name(&self) -> &'static str {
        "index_in_bounds"
    }

    fn check(&self, state: &ClientSnapshot) -> InvariantResult {
        if state.index > state.configured_capacity {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "index {} beyond capacity {}",
                    state.index, state.configured_capacity
                ),
            });
        }
        Ok(())
    }
}

/// The ring keeps the length it was configured with.
pub struct CapacityFixed;

impl Invariant for CapacityFixed {
    fn name(&self) -> &'static str {
        "capacity_fixed"
    }

    fn check(&self, state: &ClientSnapshot) -> InvariantResult {
        if state.buffer.len() != state.configured_capacity {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "ring has {} slots, configured {}",
                    state.buffer.len(),
                    state.configured_capacity
                ),
            });
        }
        Ok(())
    }
}
