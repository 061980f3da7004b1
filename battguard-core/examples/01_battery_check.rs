//! Basic Battery Check Example
//!
//! Evaluates a handful of battery readings against the default safe
//! windows and prints a line for every parameter that is out of range.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_battery_check
//! ```

use battguard_core::{
    battery_is_ok,
    evaluator::{BatteryLimits, BatteryReading},
    errors::EvaluationError,
    BatteryEvaluator, StdoutSink,
};

fn main() -> Result<(), EvaluationError> {
    println!("BattGuard Battery Check Example");
    println!("===============================\n");

    let limits = BatteryLimits::default();
    println!("Safe windows:");
    println!(
        "  Temperature:     {}°C .. {}°C",
        limits.temperature.lower(),
        limits.temperature.upper()
    );
    println!(
        "  State of Charge: {}% .. {}%",
        limits.state_of_charge.lower(),
        limits.state_of_charge.upper()
    );
    println!("  Charge Rate:     <= {}C", limits.charge_rate.upper());
    println!();

    let readings = [
        ("Healthy pack", BatteryReading::new(25.0, 70.0, 0.7)),
        ("Hot pack", BatteryReading::new(50.0, 70.0, 0.7)),
        ("Cold, empty, fast-charging", BatteryReading::new(-5.0, 10.0, 0.9)),
        ("Everything too high", BatteryReading::new(50.0, 85.0, 0.9)),
    ];

    let mut sink = StdoutSink;
    for (label, reading) in &readings {
        println!(
            "{} ({}°C, {}%, {}C):",
            label, reading.temperature, reading.state_of_charge, reading.charge_rate
        );
        let ok = battery_is_ok(
            reading.temperature,
            reading.state_of_charge,
            reading.charge_rate,
            &mut sink,
        )?;
        println!("  => {}\n", if ok { "OK" } else { "NOT OK" });
    }

    // Sensor dropout: the evaluator refuses to guess
    let evaluator = BatteryEvaluator::default();
    match evaluator.evaluate(&BatteryReading::new(f32::NAN, 70.0, 0.7)) {
        Ok(evaluation) => println!("Unexpected evaluation: {:?}", evaluation),
        Err(e) => println!("Rejected reading: {}", e),
    }

    Ok(())
}
