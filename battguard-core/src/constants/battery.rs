//! Battery Safe Operating Windows
//!
//! Fixed limits for the three measurements BattGuard evaluates. All windows
//! are closed: a reading equal to a bound is still in range.

// ===== TEMPERATURE =====

/// Lowest cell temperature accepted while charging (°C).
///
/// Charging lithium cells below freezing plates metallic lithium on the
/// anode.
pub const TEMPERATURE_MIN_C: f32 = 0.0;

/// Highest cell temperature accepted while charging (°C).
///
/// Above this, electrolyte breakdown and capacity fade accelerate.
pub const TEMPERATURE_MAX_C: f32 = 45.0;

// ===== STATE OF CHARGE =====

/// Lowest accepted state of charge (% of capacity).
///
/// Deep discharge below this stresses the cell chemistry.
pub const STATE_OF_CHARGE_MIN_PCT: f32 = 20.0;

/// Highest accepted state of charge (% of capacity).
///
/// Holding cells near full charge shortens their service life.
pub const STATE_OF_CHARGE_MAX_PCT: f32 = 80.0;

// ===== CHARGE RATE =====

/// Highest accepted charge rate (C-units).
///
/// There is no lower bound: a zero or negative rate (idle, discharging) is
/// never a charging hazard.
pub const CHARGE_RATE_MAX_C: f32 = 0.8;
