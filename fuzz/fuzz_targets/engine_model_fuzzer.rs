//! Fuzz target for engine/model equivalence
//!
//! # Strategy
//!
//! - Arbitrary ring capacity, including zero (empty ring branch)
//! - Arbitrary interleavings of every engine operation
//! - Arbitrary host/port arguments to `start`
//!
//! # Invariants
//!
//! - Engine and reference model return identical results
//! - Engine and reference model emit identical diagnostics
//! - Counters stay balanced and match the diagnostics emitted
//! - Write index never exceeds capacity; capacity never changes
//! - NEVER panic on any operation sequence

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use whathappen_core::{Client, ClientConfig};
use whathappen_harness::{
    ClientSnapshot, InvariantRegistry, ModelClient, ObservableState, Operation, apply,
};

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    operations: Vec<Operation>,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.capacity);
    let mut client = Client::with_config(ClientConfig { capacity, ..ClientConfig::default() });
    let mut model = ModelClient::new(capacity);
    let invariants = InvariantRegistry::standard();
    let mut diagnostics = 0u64;
    let mut calls = 0u64;

    for op in input.operations {
        if matches!(op, Operation::Start { .. }) {
            calls += 1;
        }

        let real = apply(&mut client, op);
        assert_eq!(real, model.apply(op), "diverged on {op:?}");
        diagnostics += real.observations.len() as u64;

        assert_eq!(ObservableState::from_client(&client), model.observable_state());
        invariants.assert_all(&ClientSnapshot::from_client(&client, diagnostics, calls), "fuzz");
    }
});
