//! Forecast Constants
//!
//! The projection covers one hour in five-minute steps, both ends inclusive.

/// Minutes between forecast points.
pub const FORECAST_STEP_MIN: u32 = 5;

/// Last forecast offset (minutes).
pub const FORECAST_HORIZON_MIN: u32 = 60;

/// Number of points in a forecast: offsets 0, 5, ..., 60.
pub const FORECAST_POINTS: usize = (FORECAST_HORIZON_MIN / FORECAST_STEP_MIN) as usize + 1;

/// Steepness of the logistic growth curve (1/min).
pub const GROWTH_STEEPNESS_PER_MIN: f64 = 0.1;

/// Offset at which the logistic curve crosses its midpoint (minutes).
pub const GROWTH_MIDPOINT_MIN: f64 = 20.0;

/// Constant term added to the logistic curve.
///
/// Puts the projection at ~0.5x current at t=0, 1.0x at the midpoint and
/// approaching 1.5x at the horizon.
pub const GROWTH_BASELINE: f64 = 0.5;

/// Upper bound (exclusive) of steady-state sensor noise in normal operations (ppm).
pub const STEADY_STATE_NOISE_MAX_PPM: f64 = 5.0;

/// Scale used to round forecast values to one decimal place.
pub const FORECAST_ROUNDING_SCALE: f64 = 10.0;
