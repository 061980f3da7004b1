use crate::{
    constants::battery::{STATE_OF_CHARGE_MAX_PCT, STATE_OF_CHARGE_MIN_PCT},
    types::BreachKind,
};

use super::range;

/// Classify a state of charge in percent against `[20, 80]`
pub fn classify_state_of_charge(percent: f32) -> BreachKind {
    range::classify_range(percent, STATE_OF_CHARGE_MIN_PCT, STATE_OF_CHARGE_MAX_PCT)
}
