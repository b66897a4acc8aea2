//! Application layer for WhatHappen
//!
//! Executes the actions produced by the counter engine. The engine stays pure;
//! everything observable goes through a [`Driver`].
//!
//! # Components
//!
//! - [`Driver`]: Trait for executing engine actions
//! - [`StdoutDriver`]: Writes diagnostics as text lines
//! - [`Runtime`]: Calls `start` repeatedly and feeds actions to the driver
//! - [`RuntimeConfig`]: Call arguments and iteration bound

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod runtime;

pub use driver::{Driver, StdoutDriver};
pub use error::{ConfigError, RuntimeError};
pub use runtime::{MAX_CAPACITY, RunSummary, Runtime, RuntimeConfig};
