//! Observable state snapshots for invariant checking.
//!
//! Invariants operate on snapshots rather than live state so every check in
//! one pass sees the same values.

use whathappen_app::{Driver, Runtime};
use whathappen_core::Client;

/// Snapshot of a client's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSnapshot {
    /// Increment counter.
    pub in_count: i32,
    /// Decrement counter.
    pub out_count: i32,
    /// Next write position in the ring.
    pub index: usize,
    /// Capacity the client was configured with.
    pub configured_capacity: usize,
    /// Ring contents.
    pub buffer: Vec<i32>,
    /// Diagnostics emitted so far.
    pub diagnostics: u64,
    /// `start` calls made so far.
    pub calls: u64,
}

impl ClientSnapshot {
    /// Snapshot a client, with diagnostic and call totals tracked by the
    /// caller.
    pub fn from_client(client: &Client, diagnostics: u64, calls: u64) -> Self {
        let state = client.state();
        Self {
            in_count: state.in_count(),
            out_count: state.out_count(),
            index: state.index(),
            configured_capacity: client.config().capacity,
            buffer: state.buffer().to_vec(),
            diagnostics,
            calls,
        }
    }

    /// Snapshot the client inside a runtime, using the runtime's totals.
    ///
    /// Counts every diagnostic the engine produced, delivered or not, so the
    /// snapshot stays consistent after a driver error.
    pub fn from_runtime<D: Driver>(runtime: &Runtime<D>) -> Self {
        let summary = runtime.summary();
        Self::from_client(
            runtime.client(),
            summary.diagnostics + summary.undelivered,
            summary.calls,
        )
    }
}
