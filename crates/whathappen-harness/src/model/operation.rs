//! Operations for model-based testing.
//!
//! Operations cover every public engine operation. They are generated by
//! proptest, the fuzzer or a seeded [`Scenario`](crate::Scenario) and applied
//! to both the model and the real client.

use arbitrary::Arbitrary;

/// Operations that can be applied to an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Public entry point with placeholder arguments.
    Start {
        /// Host argument (never read).
        host: i32,
        /// Port argument (never read).
        port: i32,
    },

    /// Compute and record a message value.
    RecordMessage,

    /// Query whether the ring has no slots.
    IsEmpty,

    /// Bump the counters and emit one diagnostic.
    DiagnosticStep,

    /// Run the juggling loop directly.
    ConvergenceLoop,
}

impl Operation {
    /// The reference driver's call: `start(10, 10)`.
    pub const REFERENCE_START: Self = Self::Start { host: 10, port: 10 };
}

/// Value returned by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Handle from `start` or the juggling loop.
    Handle(i32),
    /// Value computed by `record_message`.
    Message(i32),
    /// Boolean from `is_empty` or the diagnostic step.
    Flag(bool),
}

/// An operation's result together with the diagnostics it emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Returned value.
    pub result: OperationResult,
    /// Diagnostic observations in emission order.
    pub observations: Vec<bool>,
}

impl Applied {
    /// Result with no diagnostics.
    pub fn quiet(result: OperationResult) -> Self {
        Self { result, observations: Vec::new() }
    }
}
