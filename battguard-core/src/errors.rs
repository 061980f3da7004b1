//! Error Types for Battery Evaluation
//!
//! ## Design Philosophy
//!
//! Range classification itself never fails: every real number lands in
//! exactly one of `Normal`, `TooLow` or `TooHigh`. The only thing that can
//! go wrong is a reading that is not a real number at all.
//!
//! IEEE-754 comparisons against NaN are always false, so a naive range check
//! would quietly report a NaN temperature as `Normal`. A battery that cannot
//! report its own temperature is not a healthy battery, so
//! [`BatteryEvaluator::evaluate`](crate::BatteryEvaluator::evaluate) rejects
//! NaN and ±∞ before any classification happens.
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: one parameter tag plus the offending value.
//! 2. **No Heap Allocation**: nothing but `Copy` data inside.
//! 3. **Actionable Information**: the error names which measurement was bad.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use battguard_core::{evaluate_battery, EvaluationError, Parameter};
//!
//! match evaluate_battery(25.0, f32::NAN, 0.5) {
//!     Ok(evaluation) if evaluation.overall_ok => {
//!         // Keep charging
//!     }
//!     Ok(_) => {
//!         // Out of range - throttle or stop charging
//!     }
//!     Err(EvaluationError::InvalidValue { parameter, .. }) => {
//!         // Sensor fault on `parameter`
//!         assert_eq!(parameter, Parameter::StateOfCharge);
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::types::Parameter;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Evaluation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// Reading makes no physical sense (NaN, infinity)
    #[error("{parameter} reading {value} is not a finite number")]
    InvalidValue {
        /// Measurement that carried the bad value
        parameter: Parameter,
        /// The rejected reading
        value: f32,
    },
}

impl EvaluationError {
    /// Parameter the error refers to
    pub const fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidValue { parameter, .. } => *parameter,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvaluationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { parameter, value } =>
                defmt::write!(fmt, "{} reading {} is not finite", parameter, value),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message_names_parameter() {
        let err = EvaluationError::InvalidValue {
            parameter: Parameter::ChargeRate,
            value: f32::INFINITY,
        };
        assert_eq!(err.to_string(), "Charge Rate reading inf is not a finite number");
        assert_eq!(err.parameter(), Parameter::ChargeRate);
    }
}
