//! Runtime and configuration errors.
//!
//! The engine itself cannot fail. Errors only arise where actions meet the
//! outside world or where the caller supplies configuration.

use std::io;

use thiserror::Error;

/// Errors produced while executing engine actions.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Writing a diagnostic line failed.
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),

    /// A bounded driver observed more diagnostics than it allows.
    #[error("step budget exceeded: observed {steps} diagnostics with a budget of {budget}")]
    StepBudgetExceeded {
        /// Maximum diagnostics the driver accepts.
        budget: u64,
        /// Diagnostics observed when the budget tripped.
        steps: u64,
    },
}

impl RuntimeError {
    /// Returns true if the reader of the output went away.
    ///
    /// A closed pipe ends the run; it is not a failure of the engine.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Invalid runtime or engine configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A bounded run must make at least one call.
    #[error("iteration count must be at least 1 (omit it to run forever)")]
    ZeroIterations,

    /// Ring capacity is larger than the runtime accepts.
    #[error("ring capacity {capacity} exceeds the maximum of {max}")]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: usize,
        /// Largest accepted capacity.
        max: usize,
    },
}
