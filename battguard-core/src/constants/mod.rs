//! Constants for BattGuard Core
//!
//! Every threshold the evaluator applies is defined here with its unit and
//! the reasoning behind it. Code elsewhere refers to these names, never to
//! the raw numbers.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Keep lower and upper bounds of a window next to each other

/// Safe operating windows for battery measurements.
pub mod battery;

pub use battery::{
    TEMPERATURE_MIN_C, TEMPERATURE_MAX_C,
    STATE_OF_CHARGE_MIN_PCT, STATE_OF_CHARGE_MAX_PCT,
    CHARGE_RATE_MAX_C,
};
