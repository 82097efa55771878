//! Status Thresholds and Financial Exposure
//!
//! Tier thresholds are strict: a reading must *exceed* the value to reach
//! the tier. Thresholds are checked from the lowest tier up and the highest
//! tier reached wins.

// ===== GAS THRESHOLDS (ppm) =====

/// Gas level above which the facility must evacuate (ppm).
pub const EVACUATE_GAS_PPM: f64 = 200.0;

/// Gas level above which the status is critical (ppm).
pub const CRITICAL_GAS_PPM: f64 = 50.0;

/// Gas level above which the status is a warning (ppm).
pub const WARNING_GAS_PPM: f64 = 20.0;

// ===== THERMAL THRESHOLDS (heat-stress units) =====

/// Thermal index above which the status is critical.
pub const CRITICAL_THERMAL_INDEX: f64 = 150.0;

/// Thermal index above which the status is a warning.
pub const WARNING_THERMAL_INDEX: f64 = 60.0;

// ===== FINANCIAL EXPOSURE (currency units) =====

/// Exposure at the warning tier, before leak-rate scaling.
pub const FINANCIAL_RISK_WARNING: f64 = 500_000.0;

/// Exposure at critical and evacuate tiers, before leak-rate scaling.
pub const FINANCIAL_RISK_SEVERE: f64 = 50_000_000.0;
