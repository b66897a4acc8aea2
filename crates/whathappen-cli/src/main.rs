//! WhatHappen driver binary.
//!
//! Calls `start(host, port)` on a single engine forever, printing `false` once
//! per diagnostic step. Logs go to stderr so stdout carries only diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Run forever, like the reference driver
//! whathappen
//!
//! # Make five calls and exit
//! whathappen --iterations 5
//!
//! # Trace every juggling iteration
//! RUST_LOG=whathappen_core=trace whathappen -n 1
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use whathappen_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match whathappen_cli::run(&args, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "run failed");
            // Nothing useful left to do if stderr is gone too.
            let _ = writeln!(io::stderr().lock(), "whathappen: {err}");
            ExitCode::FAILURE
        },
    }
}
