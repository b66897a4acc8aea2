//! Driver trait for executing engine actions.
//!
//! The [`Driver`] trait decouples the runtime from where diagnostics end up.
//! Production writes them to standard output; simulation records them in
//! memory so the same [`crate::Runtime`] loop runs in both.

use std::io::Write;

use whathappen_core::ClientAction;

use crate::RuntimeError;

/// Executes actions produced by the engine.
///
/// # Implementations
///
/// - **CLI**: [`StdoutDriver`] writes one text line per diagnostic
/// - **Simulation**: records diagnostics and enforces a step budget
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Execute a single action.
    ///
    /// Called once per action, in the order the engine produced them.
    fn emit(&mut self, action: &ClientAction) -> Result<(), Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Driver that writes each diagnostic as a line of text.
///
/// A `false` observation becomes the line `false`.
#[derive(Debug)]
pub struct StdoutDriver<W: Write> {
    out: W,
}

impl<W: Write> StdoutDriver<W> {
    /// Driver writing to an arbitrary sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the driver and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Driver for StdoutDriver<W> {
    type Error = RuntimeError;

    fn emit(&mut self, action: &ClientAction) -> Result<(), Self::Error> {
        match action {
            ClientAction::Diagnostic { .. } => writeln!(self.out, "{action}")?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    /// Sink that refuses every write.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn diagnostic_is_written_as_a_line() {
        let mut driver = StdoutDriver::new(Vec::new());
        driver.emit(&ClientAction::Diagnostic { observation: false }).unwrap();
        driver.emit(&ClientAction::Diagnostic { observation: false }).unwrap();
        driver.flush().unwrap();

        assert_eq!(driver.into_inner(), b"false\nfalse\n");
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let mut driver = StdoutDriver::new(ClosedPipe);
        let err = driver.emit(&ClientAction::Diagnostic { observation: false }).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
