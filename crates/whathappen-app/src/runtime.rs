//! Runtime loop.
//!
//! The runtime owns one [`Client`] and a [`Driver`]. Each step calls
//! [`Client::start`] once and hands every resulting action to the driver
//! before the next call.

use tracing::{debug, info};
use whathappen_core::{Client, ClientConfig};

use crate::{ConfigError, Driver};

/// Largest ring capacity the runtime accepts.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Arguments for each `start` call and the number of calls to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Host passed to `start`. Never read by the engine.
    pub host: i32,
    /// Port passed to `start`. Never read by the engine.
    pub port: i32,
    /// Number of `start` calls. `None` runs until the driver fails.
    pub iterations: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { host: 10, port: 10, iterations: None }
    }
}

impl RuntimeConfig {
    /// Reject configurations that cannot describe a meaningful run.
    pub fn validate(&self, client: &ClientConfig) -> Result<(), ConfigError> {
        if self.iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        if client.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                capacity: client.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Totals for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Completed `start` calls.
    pub calls: u64,
    /// Diagnostics handed to the driver.
    pub diagnostics: u64,
    /// Diagnostics the engine produced that never reached the driver because
    /// an earlier emit in the same call failed, including the failed one.
    pub undelivered: u64,
    /// Value returned by the most recent call.
    pub last_handle: Option<i32>,
}

/// Drives a [`Client`] through a [`Driver`].
pub struct Runtime<D: Driver> {
    client: Client,
    driver: D,
    config: RuntimeConfig,
    summary: RunSummary,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime around an existing client.
    pub fn new(client: Client, driver: D, config: RuntimeConfig) -> Self {
        Self { client, driver, config, summary: RunSummary::default() }
    }

    /// The engine.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Runtime configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Totals so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Consume the runtime and return the client and driver.
    pub fn into_parts(self) -> (Client, D) {
        (self.client, self.driver)
    }

    /// Make one `start` call and execute its actions.
    ///
    /// Returns the call's handle. On a driver error the call is not counted
    /// and its remaining actions are added to
    /// [`RunSummary::undelivered`].
    pub fn step(&mut self) -> Result<i32, D::Error> {
        let (handle, actions) = self.client.start(self.config.host, self.config.port).into_parts();

        for (delivered, action) in actions.iter().enumerate() {
            if let Err(err) = self.driver.emit(action) {
                self.summary.undelivered += (actions.len() - delivered) as u64;
                return Err(err);
            }
            self.summary.diagnostics += 1;
        }

        self.summary.calls += 1;
        self.summary.last_handle = Some(handle);
        debug!(call = self.summary.calls, handle, "start completed");

        Ok(handle)
    }

    /// Run the configured number of calls, or forever when unbounded.
    ///
    /// An unbounded run only returns when the driver fails.
    pub fn run(&mut self) -> Result<RunSummary, D::Error> {
        info!(iterations = ?self.config.iterations, "runtime starting");

        match self.config.iterations {
            Some(iterations) => {
                for _ in 0..iterations {
                    self.step()?;
                }
            },
            None => loop {
                self.step()?;
            },
        }

        self.driver.flush()?;
        info!(
            calls = self.summary.calls,
            diagnostics = self.summary.diagnostics,
            "runtime stopped"
        );

        Ok(self.summary)
    }
}
