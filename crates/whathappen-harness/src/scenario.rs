//! Seeded, reproducible operation sequences.
//!
//! A [`Scenario`] fixes a ring capacity and a list of operations. Running it
//! against the model and against the real client yields two [`Trace`]s that
//! must be identical. The same seed always generates the same scenario.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use whathappen_core::{Client, ClientConfig, DEFAULT_CAPACITY};

use crate::{
    invariants::{ClientSnapshot, InvariantRegistry, Violation},
    model::{self, ModelClient, ObservableState, Operation, OperationResult},
};

/// Everything observable about one run of a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Result of each operation, in order.
    pub results: Vec<OperationResult>,
    /// All diagnostic observations, in emission order.
    pub observations: Vec<bool>,
    /// Final state.
    pub state: ObservableState,
}

/// Deterministic operation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Seed the scenario was generated from.
    pub seed: u64,
    /// Ring capacity.
    pub capacity: usize,
    /// Operations in application order.
    pub operations: Vec<Operation>,
}

impl Scenario {
    /// The reference driver: `calls` invocations of `start(10, 10)`.
    pub fn reference(calls: usize) -> Self {
        Self {
            seed: 0,
            capacity: DEFAULT_CAPACITY,
            operations: vec![Operation::REFERENCE_START; calls],
        }
    }

    /// Generate `len` operations and a capacity in `0..=20` from `seed`.
    pub fn generate(seed: u64, len: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let capacity = rng.gen_range(0..=DEFAULT_CAPACITY * 2);
        let operations = (0..len).map(|_| random_operation(&mut rng)).collect();
        Self { seed, capacity, operations }
    }

    /// Run against the reference model.
    pub fn run_model(&self) -> Trace {
        let mut model = ModelClient::new(self.capacity);
        let mut results = Vec::with_capacity(self.operations.len());
        let mut observations = Vec::new();

        for op in &self.operations {
            let applied = model.apply(*op);
            results.push(applied.result);
            observations.extend(applied.observations);
        }

        Trace { results, observations, state: model.observable_state() }
    }

    /// Run against a real client, checking `invariants` after every operation.
    ///
    /// Stops at the first operation that leaves the client in violation.
    pub fn run_client(&self, invariants: &InvariantRegistry) -> Result<Trace, Vec<Violation>> {
        let config = ClientConfig { capacity: self.capacity, ..ClientConfig::default() };
        let mut client = Client::with_config(config);
        let mut results = Vec::with_capacity(self.operations.len());
        let mut observations = Vec::new();
        let mut calls = 0u64;

        for op in &self.operations {
            if matches!(op, Operation::Start { .. }) {
                calls += 1;
            }

            let applied = model::apply(&mut client, *op);
            results.push(applied.result);
            observations.extend(applied.observations);

            let snapshot = ClientSnapshot::from_client(&client, observations.len() as u64, calls);
            invariants.check_all(&snapshot)?;
        }

        tracing::debug!(
            seed = self.seed,
            operations = self.operations.len(),
            diagnostics = observations.len(),
            "scenario finished"
        );

        Ok(Trace { results, observations, state: ObservableState::from_client(&client) })
    }
}

fn random_operation(rng: &mut ChaCha8Rng) -> Operation {
    match rng.gen_range(0..13) {
        0..=3 => Operation::Start {
            host: rng.gen_range(-1024..=65_535),
            port: rng.gen_range(-1024..=65_535),
        },
        4..=7 => Operation::RecordMessage,
        8 => Operation::IsEmpty,
        9 | 10 => Operation::DiagnosticStep,
        _ => Operation::ConvergenceLoop,
    }
}
