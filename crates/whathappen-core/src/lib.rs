//! Counter engine
//!
//! Sans-IO state machine owning a fixed-capacity message ring, a pair of
//! increment/decrement counters and the deterministic juggling loop.
//!
//! # Architecture
//!
//! The engine never performs I/O. Operations that would print a diagnostic
//! return it as a [`ClientAction`] inside an [`Outcome`], in the order the
//! diagnostics were produced. The caller decides how to execute them.
//!
//! # Components
//!
//! - [`Client`]: the engine and its public entry point [`Client::start`]
//! - [`ClientState`]: counters and message ring
//! - [`MessageRing`]: fixed-capacity circular log with wraparound reset
//! - [`Juggle`]: the three working integers of the convergence loop
//! - [`ClientConfig`]: capacity, seed and iteration ceiling

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod client;
mod config;
mod juggle;
mod ring;
mod state;

pub use action::{ClientAction, Outcome};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_CAPACITY, DEFAULT_MAX_ITERATIONS};
pub use juggle::{Juggle, Seed};
pub use ring::{MessageRing, RingWrite};
pub use state::ClientState;
