//! Value Types for Battery Evaluation
//!
//! ## Overview
//!
//! Three small `Copy` types carry everything an evaluation produces:
//!
//! - [`Parameter`] names the measurement (temperature, state of charge,
//!   charge rate) and knows its display label and unit.
//! - [`BreachKind`] is the outcome of classifying one value against its
//!   window.
//! - [`Diagnostic`] pairs the two for every measurement that is out of range.
//!
//! ## Rendering
//!
//! The text forms are fixed, so a battery management log reads the same on
//! every platform:
//!
//! ```text
//! BreachKind::TooLow   -> "too low"
//! BreachKind::TooHigh  -> "too high"
//! BreachKind::Normal   -> "normal"
//!
//! Diagnostic { Temperature, TooHigh } -> "Temperature is too high!"
//! ```

use core::fmt;

/// Battery measurement being evaluated
///
/// Declaration order is evaluation order, and diagnostics keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Parameter {
    /// Cell temperature in °C
    Temperature = 0,
    /// State of charge in percent of capacity
    StateOfCharge = 1,
    /// Charge rate in C-units (multiples of capacity per hour)
    ChargeRate = 2,
}

impl Parameter {
    /// Number of evaluated parameters
    pub const COUNT: usize = 3;

    /// All parameters in evaluation order
    pub const ALL: [Parameter; Self::COUNT] = [
        Parameter::Temperature,
        Parameter::StateOfCharge,
        Parameter::ChargeRate,
    ];

    /// Human-readable label used in diagnostics
    pub const fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::StateOfCharge => "State of Charge",
            Parameter::ChargeRate => "Charge Rate",
        }
    }

    /// Unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::StateOfCharge => "%",
            Parameter::ChargeRate => "C",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a value falls relative to its safe window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BreachKind {
    /// Inside the window, bounds included
    #[default]
    Normal = 0,
    /// Below the lower bound
    TooLow = 1,
    /// Above the upper bound
    TooHigh = 2,
}

impl BreachKind {
    /// Text used in diagnostic messages
    pub const fn describe(&self) -> &'static str {
        match self {
            BreachKind::TooLow => "too low",
            BreachKind::TooHigh => "too high",
            BreachKind::Normal => "normal",
        }
    }

    /// True for `TooLow` and `TooHigh`
    pub const fn is_breach(&self) -> bool {
        !matches!(self, BreachKind::Normal)
    }
}

impl fmt::Display for BreachKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single out-of-range finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Measurement that breached
    pub parameter: Parameter,
    /// Direction of the breach
    pub breach: BreachKind,
}

impl Diagnostic {
    /// Pair a parameter with its classification
    pub const fn new(parameter: Parameter, breach: BreachKind) -> Self {
        Self { parameter, breach }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}!", self.parameter.label(), self.breach.describe())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Parameter {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BreachKind {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.describe())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Diagnostic {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str} is {=str}!", self.parameter.label(), self.breach.describe())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn breach_descriptions() {
        assert_eq!(BreachKind::TooLow.describe(), "too low");
        assert_eq!(BreachKind::TooHigh.describe(), "too high");
        assert_eq!(BreachKind::Normal.describe(), "normal");
        assert_eq!(BreachKind::TooHigh.to_string(), "too high");
    }

    #[test]
    fn only_normal_is_not_a_breach() {
        assert!(!BreachKind::Normal.is_breach());
        assert!(BreachKind::TooLow.is_breach());
        assert!(BreachKind::TooHigh.is_breach());
    }

    #[test]
    fn parameter_labels_and_order() {
        let labels: Vec<_> = Parameter::ALL.iter().map(Parameter::label).collect();
        assert_eq!(labels, ["Temperature", "State of Charge", "Charge Rate"]);
        assert_eq!(Parameter::StateOfCharge.unit(), "%");
    }

    #[test]
    fn diagnostic_line() {
        let diagnostic = Diagnostic::new(Parameter::StateOfCharge, BreachKind::TooLow);
        assert_eq!(diagnostic.to_string(), "State of Charge is too low!");
    }
}
