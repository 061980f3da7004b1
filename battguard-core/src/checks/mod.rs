//! Battery Range Checks
//!
//! ## Overview
//!
//! Each battery measurement has a safe operating window. This module
//! classifies a single value against its window and reports which side, if
//! any, it fell out on.
//!
//! | Parameter       | Lower  | Upper  | Unit |
//! |-----------------|--------|--------|------|
//! | Temperature     | 0      | 45     | °C   |
//! | State of Charge | 20     | 80     | %    |
//! | Charge Rate     | (none) | 0.8    | C    |
//!
//! ## Closed Windows
//!
//! Bounds are inclusive. A cell at exactly 45°C is `Normal`; 45.001°C is
//! `TooHigh`:
//! ```rust
//! use battguard_core::{classify_temperature, BreachKind};
//!
//! assert_eq!(classify_temperature(45.0), BreachKind::Normal);
//! assert_eq!(classify_temperature(45.001), BreachKind::TooHigh);
//! ```
//!
//! ## Charge Rate Has No Floor
//!
//! Zero or negative charge rate means the pack is idle or discharging, which
//! is never a charging hazard. `classify_charge_rate` therefore only ever
//! returns `Normal` or `TooHigh`.
//!
//! ## Non-finite Input
//!
//! These functions are total and never fail. Comparisons with NaN are
//! always false, so NaN classifies as `Normal` here. Callers that can see
//! NaN should go through [`BatteryEvaluator`](crate::BatteryEvaluator),
//! which rejects non-finite readings before classifying them.
//!
//! ## Custom Windows
//!
//! ```rust
//! use battguard_core::{Thresholds, BreachKind};
//!
//! // Cold-weather pack with a heater: allow charging down to -10°C
//! let window = Thresholds::new(-10.0, 45.0);
//! assert_eq!(window.classify(-5.0), BreachKind::Normal);
//! ```

mod range;
mod temperature;
mod state_of_charge;
mod charge_rate;

pub use range::{classify_range, classify_upper_bound, Thresholds};
pub use temperature::classify_temperature;
pub use state_of_charge::classify_state_of_charge;
pub use charge_rate::classify_charge_rate;

use crate::types::BreachKind;

/// Human-readable text for a classification
pub const fn describe(kind: BreachKind) -> &'static str {
    kind.describe()
}
