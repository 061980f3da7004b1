//! Core traits
//!
//! Keep them simple - a battery monitor doesn't need complex abstractions.

use crate::types::Diagnostic;

/// Receiver for rendered diagnostics
///
/// Evaluation never writes output itself. Whoever wants the
/// `"Temperature is too high!"` lines plugs a sink in here: a console, a log
/// backend, a display driver or a test buffer.
///
/// Any `FnMut(&Diagnostic)` closure is a sink.
pub trait DiagnosticSink {
    /// Handle one out-of-range finding
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable reading (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
