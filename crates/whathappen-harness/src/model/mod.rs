//! Reference model for model-based testing.
//!
//! [`ModelClient`] is a deliberately naive implementation of the engine.
//! [`apply`] runs the same [`Operation`] against a real [`Client`] so both can
//! be compared result by result.

mod client;
mod operation;

pub use client::{ModelClient, ObservableState};
pub use operation::{Applied, Operation, OperationResult};
use whathappen_core::{Client, ClientAction};

/// Apply an operation to a real client.
pub fn apply(client: &mut Client, op: Operation) -> Applied {
    let (result, actions) = match op {
        Operation::Start { host, port } => {
            let (handle, actions) = client.start(host, port).into_parts();
            (OperationResult::Handle(handle), actions)
        },
        Operation::ConvergenceLoop => {
            let (handle, actions) = client.convergence_loop().into_parts();
            (OperationResult::Handle(handle), actions)
        },
        Operation::DiagnosticStep => {
            let (flag, actions) = client.diagnostic_step().into_parts();
            (OperationResult::Flag(flag), actions)
        },
        Operation::RecordMessage => (OperationResult::Message(client.record_message()), Vec::new()),
        Operation::IsEmpty => (OperationResult::Flag(client.is_empty()), Vec::new()),
    };

    let observations = actions
        .into_iter()
        .map(|action| match action {
            ClientAction::Diagnostic { observation } => observation,
        })
        .collect();

    Applied { result, observations }
}

impl ObservableState {
    /// Extract the observable state of a real client.
    pub fn from_client(client: &Client) -> Self {
        let state = client.state();
        Self {
            in_count: state.in_count(),
            out_count: state.out_count(),
            index: state.index(),
            buffer: state.buffer().to_vec(),
        }
    }
}
