//! Constants for ChemSentry Core
//!
//! This module provides centralized, documented constants used by the risk
//! engine. Every calibration value the assessor or forecaster applies is
//! defined here, named with its unit.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Severity**: Base gas severity per incident category, weather dispersion,
//!   leak-rate calibration and thermal surge parameters
//! - **Thresholds**: Status tier thresholds and financial exposure
//! - **Forecast**: Projection horizon, sampling step and growth-curve shape
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in every name (`_PPM`, `_M`, `_MIN`)
//! 3. Group related constants together

/// Base severity, dispersion and intensity calibration.
pub mod severity;

/// Status tier thresholds and financial exposure figures.
pub mod thresholds;

/// Forecast horizon and growth-curve parameters.
pub mod forecast;

// Re-export commonly used constants for convenience
pub use severity::{
    BASE_SEVERITY_NORMAL_PPM, BASE_SEVERITY_MINOR_LEAK_PPM,
    BASE_SEVERITY_CATASTROPHIC_PPM, BASE_SEVERITY_FIRE_PPM,
    DISPERSION_NEUTRAL, DISPERSION_PRECIPITATION, DISPERSION_FOG,
    LEAK_RATE_CALIBRATION_PCT,
};

pub use thresholds::{
    EVACUATE_GAS_PPM, CRITICAL_GAS_PPM, CRITICAL_THERMAL_INDEX,
    WARNING_GAS_PPM, WARNING_THERMAL_INDEX,
    FINANCIAL_RISK_WARNING, FINANCIAL_RISK_SEVERE,
};

pub use forecast::{
    FORECAST_POINTS, FORECAST_STEP_MIN, FORECAST_HORIZON_MIN,
};
