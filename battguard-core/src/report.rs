//! Diagnostic Reporting
//!
//! ## Overview
//!
//! Evaluation returns data; this module turns that data into the familiar
//! one-line messages and hands them to a [`DiagnosticSink`]:
//!
//! ```text
//! Temperature is too high!
//! State of Charge is too low!
//! Charge Rate is too high!
//! ```
//!
//! Only breaches are reported. A healthy battery produces no output.
//!
//! ## Sinks
//!
//! - [`FmtSink`]: any `core::fmt::Write` (a `String`, a `heapless::String`,
//!   a display buffer)
//! - [`LogSink`]: one `warn` record per breach (feature `log`)
//! - [`StdoutSink`]: prints each line (feature `std`)
//! - [`CollectingSink`]: keeps the lines for inspection (feature `std`)
//! - any `FnMut(&Diagnostic)` closure
//!
//! ## Usage Example
//!
//! ```rust
//! use battguard_core::{battery_is_ok, FmtSink};
//!
//! let mut sink = FmtSink::new(String::new());
//! let ok = battery_is_ok(50.0, 85.0, 0.9, &mut sink)?;
//!
//! assert!(!ok);
//! assert_eq!(
//!     sink.into_inner(),
//!     "Temperature is too high!\nState of Charge is too high!\nCharge Rate is too high!\n",
//! );
//! # Ok::<(), battguard_core::EvaluationError>(())
//! ```

use core::fmt::{self, Write as _};

use crate::{
    errors::EvaluationResult,
    evaluator::{evaluate_battery, Evaluation},
    traits::DiagnosticSink,
    types::Diagnostic,
};

/// Emit every diagnostic of an evaluation, in order
pub fn report<S>(evaluation: &Evaluation, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    for diagnostic in &evaluation.diagnostics {
        sink.emit(diagnostic);
    }
}

/// Evaluate against the default limits, report breaches, return the verdict
pub fn battery_is_ok<S>(
    temperature: f32,
    state_of_charge: f32,
    charge_rate: f32,
    sink: &mut S,
) -> EvaluationResult<bool>
where
    S: DiagnosticSink + ?Sized,
{
    let evaluation = evaluate_battery(temperature, state_of_charge, charge_rate)?;
    report(&evaluation, sink);
    Ok(evaluation.overall_ok)
}

/// Writes one line per diagnostic into a `core::fmt::Write`
#[derive(Debug, Default)]
pub struct FmtSink<W> {
    writer: W,
    failed: bool,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer, failed: false }
    }

    /// True if any write was refused (e.g. a full fixed-capacity buffer)
    pub const fn write_failed(&self) -> bool {
        self.failed
    }

    /// Borrow the underlying writer
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> DiagnosticSink for FmtSink<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if writeln!(self.writer, "{}", diagnostic).is_err() {
            self.failed = true;
        }
    }
}

/// Sends each diagnostic to the `log` facade at `warn` level
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[cfg(feature = "log")]
impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        log::warn!(target: "battguard", "{}", diagnostic);
    }
}

/// Prints each diagnostic on its own line
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        println!("{}", diagnostic);
    }
}

/// Keeps rendered diagnostic lines
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    lines: Vec<String>,
}

#[cfg(feature = "std")]
impl CollectingSink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the collected lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(feature = "std")]
impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.lines.push(diagnostic.to_string());
    }
}
