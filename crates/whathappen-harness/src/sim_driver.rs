//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` records diagnostics in memory instead of writing them, so the
//! production [`whathappen_app::Runtime`] loop can be tested without touching
//! standard output. An optional step budget turns a runaway loop into an error
//! rather than a hung test.

use whathappen_app::{Driver, RuntimeError};
use whathappen_core::ClientAction;

/// Simulation driver for deterministic testing.
#[derive(Debug, Default, Clone)]
pub struct SimDriver {
    observations: Vec<bool>,
    budget: Option<u64>,
    steps: u64,
    flushes: u64,
}

impl SimDriver {
    /// Create an unbounded simulation driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver that fails once more than `budget` diagnostics arrive.
    pub fn with_budget(budget: u64) -> Self {
        Self { budget: Some(budget), ..Self::default() }
    }

    /// Recorded observations in arrival order.
    pub fn observations(&self) -> &[bool] {
        &self.observations
    }

    /// Diagnostics received, including one that tripped the budget.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of flushes requested by the runtime.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    /// Output a [`whathappen_app::StdoutDriver`] would have written.
    pub fn transcript(&self) -> String {
        self.observations.iter().map(|o| format!("{o}\n")).collect()
    }
}

impl Driver for SimDriver {
    type Error = RuntimeError;

    fn emit(&mut self, action: &ClientAction) -> Result<(), Self::Error> {
        self.steps += 1;
        if let Some(budget) = self.budget {
            if self.steps > budget {
                tracing::debug!(budget, steps = self.steps, "simulation step budget exceeded");
                return Err(RuntimeError::StepBudgetExceeded { budget, steps: self.steps });
            }
        }

        match action {
            ClientAction::Diagnostic { observation } => self.observations.push(*observation),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_observations() {
        let mut driver = SimDriver::new();
        driver.emit(&ClientAction::Diagnostic { observation: false }).unwrap();
        assert_eq!(driver.observations(), &[false]);
        assert_eq!(driver.transcript(), "false\n");
    }

    #[test]
    fn budget_trips_on_overflow() {
        let mut driver = SimDriver::with_budget(1);
        let action = ClientAction::Diagnostic { observation: false };
        driver.emit(&action).unwrap();

        let err = driver.emit(&action).unwrap_err();
        assert!(matches!(err, RuntimeError::StepBudgetExceeded { budget: 1, steps: 2 }));
        assert_eq!(driver.observations().len(), 1);
    }
}
