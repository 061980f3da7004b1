//! Battery Evaluation
//!
//! ## Overview
//!
//! Takes one reading of all three measurements, classifies each against its
//! window and folds the results into a single verdict:
//!
//! ```text
//! BatteryReading ─┬─ temperature     ─ classify ─┐
//!                 ├─ state_of_charge ─ classify ─┼─ Evaluation { overall_ok, diagnostics }
//!                 └─ charge_rate     ─ classify ─┘
//! ```
//!
//! - `overall_ok` is true iff every classification is `Normal`.
//! - `diagnostics` holds only the breaches, in the fixed order temperature,
//!   state of charge, charge rate.
//!
//! The evaluator keeps no state between calls; the same reading always
//! yields the same evaluation, and any number of evaluations may run in
//! parallel.
//!
//! ## Invalid Readings
//!
//! A NaN or infinite reading is rejected with
//! [`EvaluationError::InvalidValue`] before anything is classified. The
//! first offending parameter (in evaluation order) is reported.
//!
//! ## Custom Limits
//!
//! ```rust
//! use battguard_core::{BatteryEvaluator, BatteryLimits, BatteryReading, Thresholds};
//!
//! let limits = BatteryLimits {
//!     temperature: Thresholds::new(5.0, 40.0),
//!     ..BatteryLimits::default()
//! };
//! let evaluator = BatteryEvaluator::new(limits);
//!
//! let evaluation = evaluator.evaluate(&BatteryReading::new(42.0, 50.0, 0.5))?;
//! assert!(!evaluation.overall_ok);
//! # Ok::<(), battguard_core::EvaluationError>(())
//! ```

use crate::{
    checks::Thresholds,
    constants::battery::{
        CHARGE_RATE_MAX_C, STATE_OF_CHARGE_MAX_PCT, STATE_OF_CHARGE_MIN_PCT, TEMPERATURE_MAX_C,
        TEMPERATURE_MIN_C,
    },
    errors::{EvaluationError, EvaluationResult},
    traits::Validatable,
    types::{BreachKind, Diagnostic, Parameter},
};

/// Ordered breaches from one evaluation; never more than one per parameter
pub type Diagnostics = heapless::Vec<Diagnostic, { Parameter::COUNT }>;

/// One sample of all evaluated measurements
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryReading {
    /// Cell temperature in °C
    pub temperature: f32,
    /// State of charge in %
    pub state_of_charge: f32,
    /// Charge rate in C-units
    pub charge_rate: f32,
}

impl BatteryReading {
    /// Bundle three measurements
    pub const fn new(temperature: f32, state_of_charge: f32, charge_rate: f32) -> Self {
        Self {
            temperature,
            state_of_charge,
            charge_rate,
        }
    }

    /// Value for a given parameter
    pub const fn value(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::StateOfCharge => self.state_of_charge,
            Parameter::ChargeRate => self.charge_rate,
        }
    }
}

/// Safe windows for every parameter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryLimits {
    /// Temperature window in °C
    pub temperature: Thresholds,
    /// State of charge window in %
    pub state_of_charge: Thresholds,
    /// Charge rate window in C-units
    pub charge_rate: Thresholds,
}

impl Default for BatteryLimits {
    fn default() -> Self {
        Self {
            temperature: Thresholds::new(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            state_of_charge: Thresholds::new(STATE_OF_CHARGE_MIN_PCT, STATE_OF_CHARGE_MAX_PCT),
            charge_rate: Thresholds::upper_only(CHARGE_RATE_MAX_C),
        }
    }
}

impl BatteryLimits {
    /// Window that applies to `parameter`
    pub const fn for_parameter(&self, parameter: Parameter) -> &Thresholds {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::StateOfCharge => &self.state_of_charge,
            Parameter::ChargeRate => &self.charge_rate,
        }
    }
}

/// Outcome of evaluating one reading
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// True iff no parameter breached
    pub overall_ok: bool,
    /// Breached parameters in evaluation order
    pub diagnostics: Diagnostics,
}

impl Evaluation {
    fn from_diagnostics(diagnostics: Diagnostics) -> Self {
        Self {
            overall_ok: diagnostics.is_empty(),
            diagnostics,
        }
    }

    /// Classification of `parameter` in this evaluation
    pub fn breach(&self, parameter: Parameter) -> BreachKind {
        self.diagnostics
            .iter()
            .find(|diagnostic| diagnostic.parameter == parameter)
            .map_or(BreachKind::Normal, |diagnostic| diagnostic.breach)
    }
}

/// Stateless evaluator over a set of limits
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatteryEvaluator {
    limits: BatteryLimits,
}

impl BatteryEvaluator {
    /// Evaluator with custom limits
    pub const fn new(limits: BatteryLimits) -> Self {
        Self { limits }
    }

    /// Limits this evaluator applies
    pub const fn limits(&self) -> &BatteryLimits {
        &self.limits
    }

    /// Classify a single value for `parameter`
    ///
    /// Total like the `classify_*` functions; NaN lands on `Normal`.
    pub fn classify(&self, parameter: Parameter, value: f32) -> BreachKind {
        self.limits.for_parameter(parameter).classify(value)
    }

    /// Evaluate a full reading
    pub fn evaluate(&self, reading: &BatteryReading) -> EvaluationResult<Evaluation> {
        for parameter in Parameter::ALL {
            let value = reading.value(parameter);
            if !value.is_valid() {
                log_warn!("{} reading {} rejected: not a finite number", parameter, value);
                return Err(EvaluationError::InvalidValue { parameter, value });
            }
        }

        let diagnostics: Diagnostics = Parameter::ALL
            .iter()
            .map(|&parameter| {
                let breach = self.classify(parameter, reading.value(parameter));
                log_debug!("{} = {}{} is {}", parameter, reading.value(parameter), parameter.unit(), breach);
                Diagnostic::new(parameter, breach)
            })
            .filter(|diagnostic| diagnostic.breach.is_breach())
            .collect();

        Ok(Evaluation::from_diagnostics(diagnostics))
    }
}

/// Evaluate temperature, state of charge and charge rate against the default
/// limits
pub fn evaluate_battery(
    temperature: f32,
    state_of_charge: f32,
    charge_rate: f32,
) -> EvaluationResult<Evaluation> {
    BatteryEvaluator::default().evaluate(&BatteryReading::new(temperature, state_of_charge, charge_rate))
}
