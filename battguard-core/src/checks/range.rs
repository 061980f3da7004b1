//! Shared range classification
//!
//! Pure functions, no side effects, safe to call from anywhere including
//! interrupt handlers.

use crate::{traits::Validatable, types::BreachKind};

/// Classify a value against the closed window `[lower, upper]`
///
/// `lower <= upper` is the caller's responsibility and is not checked.
pub fn classify_range(value: f32, lower: f32, upper: f32) -> BreachKind {
    if value < lower {
        BreachKind::TooLow
    } else if value > upper {
        BreachKind::TooHigh
    } else {
        BreachKind::Normal
    }
}

/// Classify a value against an upper bound only
///
/// Never returns `TooLow`.
pub fn classify_upper_bound(value: f32, upper: f32) -> BreachKind {
    if value > upper {
        BreachKind::TooHigh
    } else {
        BreachKind::Normal
    }
}

/// Safe window for one measurement
///
/// A missing lower bound means the window is open towards −∞.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    lower: Option<f32>,
    upper: f32,
}

impl Thresholds {
    /// Window with both bounds
    pub fn new(lower: f32, upper: f32) -> Self {
        // Sanity check: can't have lower > upper
        let (lower, upper) = if lower > upper { (upper, lower) } else { (lower, upper) };

        Self {
            lower: Some(lower),
            upper,
        }
    }

    /// Window with only an upper bound
    pub const fn upper_only(upper: f32) -> Self {
        Self { lower: None, upper }
    }

    /// Lower bound, `f32::NEG_INFINITY` when there is none
    pub fn lower(&self) -> f32 {
        self.lower.unwrap_or(f32::NEG_INFINITY)
    }

    /// Upper bound
    pub const fn upper(&self) -> f32 {
        self.upper
    }

    /// Whether the window has a lower bound at all
    pub const fn has_lower(&self) -> bool {
        self.lower.is_some()
    }

    /// Classify a value against this window
    pub fn classify(&self, value: f32) -> BreachKind {
        match self.lower {
            Some(lower) => classify_range(value, lower, self.upper),
            None => classify_upper_bound(value, self.upper),
        }
    }

    /// True if the value is finite and inside the window
    pub fn contains(&self, value: f32) -> bool {
        value.is_valid() && self.classify(value) == BreachKind::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_classification() {
        assert_eq!(classify_range(5.0, 0.0, 10.0), BreachKind::Normal);
        assert_eq!(classify_range(-1.0, 0.0, 10.0), BreachKind::TooLow);
        assert_eq!(classify_range(11.0, 0.0, 10.0), BreachKind::TooHigh);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(classify_range(0.0, 0.0, 10.0), BreachKind::Normal);
        assert_eq!(classify_range(10.0, 0.0, 10.0), BreachKind::Normal);
    }

    #[test]
    fn reversed_bounds_are_not_validated() {
        // 5 is both below 10 and above 0: lower bound wins
        assert_eq!(classify_range(5.0, 10.0, 0.0), BreachKind::TooLow);
    }

    #[test]
    fn upper_bound_never_too_low() {
        assert_eq!(classify_upper_bound(-1.0e30, 1.0), BreachKind::Normal);
        assert_eq!(classify_upper_bound(1.5, 1.0), BreachKind::TooHigh);
    }

    #[test]
    fn thresholds_swap_reversed_bounds() {
        let window = Thresholds::new(10.0, 0.0);
        assert_eq!(window.lower(), 0.0);
        assert_eq!(window.upper(), 10.0);
    }

    #[test]
    fn upper_only_window() {
        let window = Thresholds::upper_only(0.8);
        assert!(!window.has_lower());
        assert_eq!(window.lower(), f32::NEG_INFINITY);
        assert_eq!(window.classify(f32::NEG_INFINITY), BreachKind::Normal);
        assert_eq!(window.classify(0.9), BreachKind::TooHigh);
    }

    #[test]
    fn contains_rejects_nan() {
        let window = Thresholds::new(0.0, 45.0);
        assert!(window.contains(20.0));
        assert!(!window.contains(f32::NAN));
        assert!(!window.contains(50.0));
        // NaN falls through both comparisons
        assert_eq!(window.classify(f32::NAN), BreachKind::Normal);
    }
}
