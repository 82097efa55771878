//! Severity Calibration Constants
//!
//! Base gas concentrations per incident category, weather-driven dispersion
//! factors and the leak-rate calibration points used by the assessor.

// ===== BASE SEVERITY (ppm) =====

/// Base severity for normal operations (ppm).
///
/// Zero marks the "no incident" branch: the assessor reports ambient sensor
/// noise instead of a derived concentration, and no risk radius.
pub const BASE_SEVERITY_NORMAL_PPM: f64 = 0.0;

/// Base severity for a minor valve leak (ppm).
pub const BASE_SEVERITY_MINOR_LEAK_PPM: f64 = 30.0;

/// Base severity for a catastrophic pipe burst (ppm).
pub const BASE_SEVERITY_CATASTROPHIC_PPM: f64 = 150.0;

/// Base severity for a chemical fire (ppm).
///
/// Covers combustion smoke plus the toxic release itself.
pub const BASE_SEVERITY_FIRE_PPM: f64 = 400.0;

/// Gas contribution per bar of line pressure (ppm/bar).
pub const PRESSURE_GAS_PPM_PER_BAR: f64 = 0.5;

// ===== WEATHER DISPERSION =====

/// Neutral dispersion factor.
///
/// Applied for clear sky and for any weather without its own factor.
pub const DISPERSION_NEUTRAL: f64 = 1.0;

/// Dispersion factor for rain and thunderstorms.
///
/// Precipitation washes part of the plume out of the air.
pub const DISPERSION_PRECIPITATION: f64 = 0.7;

/// Dispersion factor for dense fog.
///
/// Fog keeps the plume low and concentrated.
pub const DISPERSION_FOG: f64 = 1.2;

// ===== LEAK RATE CALIBRATION (%) =====

/// Leak rate at which the intensity multiplier is exactly 1.0 (%).
///
/// A rate of 100% therefore doubles severity.
pub const LEAK_RATE_CALIBRATION_PCT: f64 = 50.0;

/// Leak rate divisor for the risk radius (%).
pub const RADIUS_LEAK_RATE_DIVISOR_PCT: f64 = 60.0;

/// Leak rate divisor for the fire thermal surge (%).
pub const THERMAL_LEAK_RATE_DIVISOR_PCT: f64 = 80.0;

// ===== NOISE AND SURGE RANGES =====

/// Upper bound (exclusive) of ambient sensor noise in normal operations (ppm).
pub const AMBIENT_NOISE_MAX_PPM: f64 = 2.0;

/// Lower bound of the fire thermal surge (heat-stress units).
pub const FIRE_SURGE_MIN: f64 = 300.0;

/// Upper bound (exclusive) of the fire thermal surge (heat-stress units).
pub const FIRE_SURGE_MAX: f64 = 500.0;

// ===== RISK RADIUS =====

/// Radius contribution per km/h of wind (m).
pub const RADIUS_M_PER_KMH_WIND: f64 = 12.0;

/// Radius contribution per bar of pressure (m).
pub const RADIUS_M_PER_BAR: f64 = 8.0;
