//! Deterministic test harness for the WhatHappen counter engine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides an independent reference implementation.
//! Operations are applied to both the model and the real [`Client`], and
//! their results, diagnostics and observable state are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks properties that must hold after every
//! operation. Use [`InvariantRegistry::standard()`] for the common set.
//!
//! # Scenarios
//!
//! [`Scenario`] generates reproducible operation sequences from a seed, and
//! [`SimDriver`] runs the production [`whathappen_app::Runtime`] loop with a
//! step budget instead of standard output.
//!
//! [`Client`]: whathappen_core::Client

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
pub mod scenario;
pub mod sim_driver;

pub use invariants::{
    CapacityFixed, ClientSnapshot, CounterBalance, CounterMatchesDiagnostics, IndexInBounds,
    Invariant, InvariantRegistry, InvariantResult, Violation,
};
pub use model::{Applied, ModelClient, ObservableState, Operation, OperationResult, apply};
pub use scenario::{Scenario, Trace};
pub use sim_driver::SimDriver;
