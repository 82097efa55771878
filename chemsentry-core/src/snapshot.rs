//! Risk Snapshot and Status Tiers
//!
//! A [`RiskSnapshot`] is the assessor's output for one scenario: the derived
//! gas concentration, thermal index, alert status, evacuation radius and
//! financial exposure. Snapshots are immutable values; a new scenario yields
//! a new snapshot.
//!
//! ## Status Tiers
//!
//! ```text
//! Secure < Warning < Critical < Evacuate
//!
//! Warning   gas > 20 ppm  or thermal > 60
//! Critical  gas > 50 ppm  or thermal > 150
//! Evacuate  gas > 200 ppm or fire hazard
//! ```
//!
//! The status is the highest tier whose condition holds. It is never
//! interpolated.

use serde::{Deserialize, Serialize};

use crate::constants::thresholds::{
    CRITICAL_GAS_PPM, CRITICAL_THERMAL_INDEX, EVACUATE_GAS_PPM, WARNING_GAS_PPM,
    WARNING_THERMAL_INDEX,
};
use crate::scenario::LeakCategory;

/// Ordered facility alert level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// No threshold reached
    #[default]
    Secure,
    /// Elevated gas or heat
    Warning,
    /// Dangerous gas or heat
    Critical,
    /// Facility must be evacuated
    Evacuate,
}

impl Status {
    /// Highest tier reached by the given readings
    ///
    /// Tiers are checked from the bottom up and each match raises the
    /// result, so the outcome equals the maximum over all matched tiers.
    pub fn classify(category: LeakCategory, toxic_gas_ppm: f64, thermal_index: f64) -> Self {
        let mut status = Status::Secure;

        if toxic_gas_ppm > WARNING_GAS_PPM || thermal_index > WARNING_THERMAL_INDEX {
            status = status.max(Status::Warning);
        }
        if toxic_gas_ppm > CRITICAL_GAS_PPM || thermal_index > CRITICAL_THERMAL_INDEX {
            status = status.max(Status::Critical);
        }
        if category == LeakCategory::FireHazard || toxic_gas_ppm > EVACUATE_GAS_PPM {
            status = status.max(Status::Evacuate);
        }

        status
    }

    /// True only for [`Status::Secure`]
    pub const fn is_secure(&self) -> bool {
        matches!(self, Status::Secure)
    }

    /// Upper-case label shown on the command panel
    pub const fn label(&self) -> &'static str {
        match self {
            Status::Secure => "SECURE",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Evacuate => "EVACUATE",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived facility risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSnapshot {
    /// Alert tier
    pub status: Status,
    /// Toxic gas concentration in ppm
    pub toxic_gas_level: f64,
    /// Heat-stress index
    pub thermal_index: f64,
    /// Evacuation radius in meters
    pub risk_radius: f64,
    /// Financial exposure in currency units
    pub financial_risk: f64,
    /// Sensors currently detecting gas, supplied by the map collaborator
    pub active_sensors: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Status::Secure < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert!(Status::Critical < Status::Evacuate);
    }

    #[test]
    fn thresholds_are_strict() {
        let minor = LeakCategory::MinorLeak;

        assert_eq!(Status::classify(minor, 20.0, 25.0), Status::Secure);
        assert_eq!(Status::classify(minor, 20.1, 25.0), Status::Warning);
        assert_eq!(Status::classify(minor, 50.0, 25.0), Status::Warning);
        assert_eq!(Status::classify(minor, 50.1, 25.0), Status::Critical);
        assert_eq!(Status::classify(minor, 200.0, 25.0), Status::Critical);
        assert_eq!(Status::classify(minor, 200.1, 25.0), Status::Evacuate);
    }

    #[test]
    fn thermal_alone_escalates() {
        let normal = LeakCategory::Normal;

        assert_eq!(Status::classify(normal, 0.0, 60.0), Status::Secure);
        assert_eq!(Status::classify(normal, 0.0, 61.0), Status::Warning);
        assert_eq!(Status::classify(normal, 0.0, 151.0), Status::Critical);
        // Heat never reaches evacuate on its own
        assert_eq!(Status::classify(normal, 0.0, 10_000.0), Status::Critical);
    }

    #[test]
    fn fire_always_evacuates() {
        assert_eq!(Status::classify(LeakCategory::FireHazard, 0.0, 0.0), Status::Evacuate);
    }

    #[test]
    fn higher_tier_wins_over_lower_match() {
        // Gas says warning, heat says critical
        assert_eq!(Status::classify(LeakCategory::MinorLeak, 30.0, 200.0), Status::Critical);
    }

    #[test]
    fn serializes_upper_case() {
        let json = serde_json::to_string(&Status::Evacuate).unwrap();
        assert_eq!(json, "\"EVACUATE\"");
        assert_eq!(Status::Warning.to_string(), "WARNING");
    }
}
