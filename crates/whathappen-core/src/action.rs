//! Client actions and operation outcomes.

use std::fmt;

/// Actions the client produces for the caller to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    /// Emit a diagnostic observation.
    ///
    /// The caller renders it as the textual form of the boolean followed by a
    /// line terminator.
    Diagnostic {
        /// Observed value. Always `false` for the diagnostic step.
        observation: bool,
    },
}

impl fmt::Display for ClientAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { observation } => write!(f, "{observation}"),
        }
    }
}

/// Result of an engine operation together with the actions it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    /// Value returned by the operation.
    pub value: T,
    /// Actions in production order.
    pub actions: Vec<ClientAction>,
}

impl<T> Outcome<T> {
    /// Create an outcome from a value and its actions.
    pub fn new(value: T, actions: Vec<ClientAction>) -> Self {
        Self { value, actions }
    }

    /// Number of diagnostic actions carried by this outcome.
    pub fn diagnostics(&self) -> usize {
        self.actions.iter().filter(|a| matches!(a, ClientAction::Diagnostic { .. })).count()
    }

    /// Split into the value and the actions.
    pub fn into_parts(self) -> (T, Vec<ClientAction>) {
        (self.value, self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_renders_like_a_boolean() {
        assert_eq!(ClientAction::Diagnostic { observation: false }.to_string(), "false");
        assert_eq!(ClientAction::Diagnostic { observation: true }.to_string(), "true");
    }

    #[test]
    fn outcome_counts_diagnostics() {
        let outcome = Outcome::new(
            7,
            vec![
                ClientAction::Diagnostic { observation: false },
                ClientAction::Diagnostic { observation: false },
            ],
        );
        assert_eq!(outcome.diagnostics(), 2);

        let (value, actions) = outcome.into_parts();
        assert_eq!(value, 7);
        assert_eq!(actions.len(), 2);
    }
}
