//! Pre-built battery scenarios
//!
//! Covers normal operation, each single-parameter breach in both
//! directions, and the everything-wrong case.

use battguard_core::{BatteryReading, BreachKind, Diagnostic, Parameter};

/// Reading plus what the evaluator must say about it
pub struct TestScenario {
    pub name: &'static str,
    pub reading: BatteryReading,
    pub overall_ok: bool,
    pub diagnostics: &'static [Diagnostic],
    /// Lines a reporting sink receives, in order
    pub lines: &'static [&'static str],
}

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// Healthy pack mid-charge
    pub fn nominal() -> TestScenario {
        TestScenario {
            name: "nominal",
            reading: BatteryReading::new(25.0, 70.0, 0.7),
            overall_ok: true,
            diagnostics: &[],
            lines: &[],
        }
    }

    /// Every single-parameter breach
    pub fn single_breaches() -> [TestScenario; 5] {
        [
            TestScenario {
                name: "temperature_too_high",
                reading: BatteryReading::new(50.0, 70.0, 0.7),
                overall_ok: false,
                diagnostics: &[Diagnostic { parameter: Parameter::Temperature, breach: BreachKind::TooHigh }],
                lines: &["Temperature is too high!"],
            },
            TestScenario {
                name: "temperature_too_low",
                reading: BatteryReading::new(-1.0, 70.0, 0.7),
                overall_ok: false,
                diagnostics: &[Diagnostic { parameter: Parameter::Temperature, breach: BreachKind::TooLow }],
                lines: &["Temperature is too low!"],
            },
            TestScenario {
                name: "state_of_charge_too_low",
                reading: BatteryReading::new(25.0, 10.0, 0.7),
                overall_ok: false,
                diagnostics: &[Diagnostic { parameter: Parameter::StateOfCharge, breach: BreachKind::TooLow }],
                lines: &["State of Charge is too low!"],
            },
            TestScenario {
                name: "state_of_charge_too_high",
                reading: BatteryReading::new(25.0, 90.0, 0.7),
                overall_ok: false,
                diagnostics: &[Diagnostic { parameter: Parameter::StateOfCharge, breach: BreachKind::TooHigh }],
                lines: &["State of Charge is too high!"],
            },
            TestScenario {
                name: "charge_rate_too_high",
                reading: BatteryReading::new(25.0, 70.0, 0.9),
                overall_ok: false,
                diagnostics: &[Diagnostic { parameter: Parameter::ChargeRate, breach: BreachKind::TooHigh }],
                lines: &["Charge Rate is too high!"],
            },
        ]
    }

    /// Cold, nearly empty pack being fast-charged
    pub fn everything_wrong() -> TestScenario {
        TestScenario {
            name: "everything_wrong",
            reading: BatteryReading::new(-5.0, 10.0, 0.9),
            overall_ok: false,
            diagnostics: &[
                Diagnostic { parameter: Parameter::Temperature, breach: BreachKind::TooLow },
                Diagnostic { parameter: Parameter::StateOfCharge, breach: BreachKind::TooLow },
                Diagnostic { parameter: Parameter::ChargeRate, breach: BreachKind::TooHigh },
            ],
            lines: &[
                "Temperature is too low!",
                "State of Charge is too low!",
                "Charge Rate is too high!",
            ],
        }
    }

    /// All scenarios
    pub fn all() -> Vec<TestScenario> {
        let mut scenarios = vec![Self::nominal()];
        scenarios.extend(Self::single_breaches());
        scenarios.push(Self::everything_wrong());
        scenarios
    }
}
