//! Command-line front end for the counter engine.
//!
//! [`run`] does everything the binary does except parsing arguments,
//! installing the log subscriber and choosing the exit code, so it can be
//! driven against any output sink.
//!
//! # Exit behavior
//!
//! - A bounded run that completes returns [`Exit::Completed`]
//! - A reader that closes the output returns [`Exit::OutputClosed`]; this is
//!   the normal way an unbounded run ends and is not an error
//! - Invalid configuration and any other write failure return [`CliError`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::io::Write;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use whathappen_app::{
    ConfigError, RunSummary, Runtime, RuntimeConfig, RuntimeError, StdoutDriver,
};
use whathappen_core::{Client, ClientConfig, DEFAULT_CAPACITY};

/// WhatHappen counter engine driver
#[derive(Parser, Debug, Clone)]
#[command(name = "whathappen")]
#[command(about = "Runs the counter engine's start loop")]
#[command(version)]
pub struct Args {
    /// Host argument passed to every call (unused by the engine)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub host: i32,

    /// Port argument passed to every call (unused by the engine)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub port: i32,

    /// Number of calls to make; runs forever when omitted
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Message ring capacity
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Errors that end the binary with a failure exit code.
#[derive(Error, Debug)]
pub enum CliError {
    /// Rejected before the first call.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing diagnostics failed for a reason other than a closed reader.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// All requested calls were made.
    Completed(RunSummary),
    /// The reader of the output went away.
    OutputClosed(RunSummary),
}

/// Build the engine and runtime from `args` and run them, writing
/// diagnostics to `out`.
pub fn run<W: Write>(args: &Args, out: W) -> Result<Exit, CliError> {
    let client_config = ClientConfig { capacity: args.capacity, ..ClientConfig::default() };
    let runtime_config =
        RuntimeConfig { host: args.host, port: args.port, iterations: args.iterations };
    runtime_config.validate(&client_config)?;

    let mut runtime = Runtime::new(
        Client::with_config(client_config),
        StdoutDriver::new(out),
        runtime_config,
    );

    match runtime.run() {
        Ok(summary) => {
            info!(calls = summary.calls, last_handle = ?summary.last_handle, "done");
            Ok(Exit::Completed(summary))
        },
        Err(err) if err.is_broken_pipe() => {
            let summary = runtime.summary();
            debug!(calls = summary.calls, "output closed, stopping");
            Ok(Exit::OutputClosed(summary))
        },
        Err(err) => Err(err.into()),
    }
}
