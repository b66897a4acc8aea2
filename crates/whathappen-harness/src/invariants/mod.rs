//! Invariant checking for deterministic testing.
//!
//! Invariants are properties that must always hold, whatever sequence of
//! operations produced the current state.
//!
//! # Architecture
//!
//! Observable state is extracted into a [`ClientSnapshot`], then every
//! registered [`Invariant`] is checked against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = ClientSnapshot::from_runtime(&runtime);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{CapacityFixed, CounterBalance, CounterMatchesDiagnostics, IndexInBounds};
pub use snapshot::ClientSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against a snapshot.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the snapshot.
    fn check(&self, state: &ClientSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard engine invariants.
    ///
    /// Includes:
    /// - [`CounterBalance`]: `in + out == 0`
    /// - [`CounterMatchesDiagnostics`]: `in` equals diagnostics emitted
    /// - [`IndexInBounds`]: write index never exceeds capacity
    /// - [`CapacityFixed`]: ring length equals configured capacity
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(CounterBalance);
        registry.add(CounterMatchesDiagnostics);
        registry.add(IndexInBounds);
        registry.add(CapacityFixed);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the snapshot.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &ClientSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking on the first failing check.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic, reason = "test assertion helper")]
    pub fn assert_all(&self, state: &ClientSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_invariants() {
        let registry = InvariantRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn fresh_snapshot_passes_invariants() {
        let registry = InvariantRegistry::standard();
        let snapshot = ClientSnapshot::from_client(&whathappen_core::Client::new(), 0, 0);
        assert!(registry.check_all(&snapshot).is_ok());
    }

    #[test]
    fn all_violations_are_reported() {
        let registry = InvariantRegistry::standard();
        let snapshot = ClientSnapshot {
            in_count: 3,
            out_count: 0,
            index: 11,
            configured_capacity: 10,
            buffer: vec![0; 9],
            diagnostics: 1,
            calls: 1,
        };

        let violations = registry.check_all(&snapshot).unwrap_err();
        let names: Vec<_> = violations.iter().map(|v| v.invariant).collect();
        assert_eq!(
            names,
            vec![
                "counter_balance",
                "counter_matches_diagnostics",
                "index_in_bounds",
                "capacity_fixed"
            ]
        );
    }
}
