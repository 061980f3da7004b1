//! Core range checks for BattGuard
//!
//! Classifies battery measurements against fixed safety windows and
//! aggregates the result into a pass/fail verdict with diagnostics.
//! Designed to run anywhere a battery management loop runs.
//!
//! Key constraints:
//! - No heap allocation (diagnostics live in a fixed `heapless::Vec`)
//! - No I/O in the evaluation path; reporting goes through a sink
//! - Every call is O(1) and stateless
//!
//! ```
//! use battguard_core::{evaluate_battery, BreachKind, Parameter};
//!
//! let evaluation = evaluate_battery(50.0, 70.0, 0.7)?;
//! assert!(!evaluation.overall_ok);
//! assert_eq!(evaluation.diagnostics[0].parameter, Parameter::Temperature);
//! assert_eq!(evaluation.diagnostics[0].breach, BreachKind::TooHigh);
//! # Ok::<(), battguard_core::EvaluationError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod checks;
pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod report;
pub mod traits;
pub mod types;

// Public API
pub use checks::{
    classify_range,
    classify_temperature,
    classify_state_of_charge,
    classify_charge_rate,
    describe,
    Thresholds,
};
pub use errors::{EvaluationError, EvaluationResult};
pub use evaluator::{
    evaluate_battery,
    BatteryEvaluator,
    BatteryLimits,
    BatteryReading,
    Diagnostics,
    Evaluation,
};
pub use report::{battery_is_ok, report, FmtSink};
pub use traits::{DiagnosticSink, Validatable};
pub use types::{BreachKind, Diagnostic, Parameter};

#[cfg(feature = "log")]
pub use report::LogSink;

#[cfg(feature = "std")]
pub use report::{CollectingSink, StdoutSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
