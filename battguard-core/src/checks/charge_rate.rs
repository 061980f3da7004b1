//! Charge rate check
//!
//! Upper bound only. Idle or discharging packs report zero or negative
//! rates, and those are always fine.

use crate::{constants::battery::CHARGE_RATE_MAX_C, types::BreachKind};

use super::range;

/// Classify a charge rate in C-units against `<= 0.8`
pub fn classify_charge_rate(c_rate: f32) -> BreachKind {
    range::classify_upper_bound(c_rate, CHARGE_RATE_MAX_C)
}
