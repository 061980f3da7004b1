//! Temperature check
//!
//! Lithium cells must not be charged below freezing or above 45°C.

use crate::{
    constants::battery::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C},
    types::BreachKind,
};

use super::range;

/// Classify a cell temperature in °C against `[0, 45]`
pub fn classify_temperature(celsius: f32) -> BreachKind {
    range::classify_range(celsius, TEMPERATURE_MIN_C, TEMPERATURE_MAX_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_temperature_is_normal() {
        assert_eq!(classify_temperature(25.0), BreachKind::Normal);
    }

    #[test]
    fn boundaries_are_normal() {
        assert_eq!(classify_temperature(0.0), BreachKind::Normal);
        assert_eq!(classify_temperature(45.0), BreachKind::Normal);
    }

    #[test]
    fn just_outside_boundaries() {
        assert_eq!(classify_temperature(-0.001), BreachKind::TooLow);
        assert_eq!(classify_temperature(45.001), BreachKind::TooHigh);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify_temperature(-40.0), BreachKind::TooLow);
        assert_eq!(classify_temperature(f32::INFINITY), BreachKind::TooHigh);
    }
}
