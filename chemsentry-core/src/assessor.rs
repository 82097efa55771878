//! Risk Assessment
//!
//! ## Overview
//!
//! [`RiskAssessor`] maps a [`ScenarioConfig`] and the map's active sensor
//! count to a [`RiskSnapshot`]. The derivation is a fixed chain of table
//! lookups and arithmetic:
//!
//! ```text
//! category ──► base severity (ppm) ─┐
//! weather  ──► dispersion factor ───┼──► toxic gas ──┐
//! leak rate ─► intensity ───────────┘                ├──► status ──► financial risk
//! temperature (+ fire surge) ──────────► thermal ────┘
//! wind, pressure, leak rate ───────────► risk radius
//! ```
//!
//! ## Randomness
//!
//! Two terms are random on purpose and drawn from the assessor's
//! [`NoiseSource`]:
//! - ambient sensor jitter in `[0, 2)` ppm when there is no incident
//! - the thermal surge of a chemical fire, `[300, 500)` scaled by `leakRate/80`
//!
//! Everything else is deterministic, so identical scenarios always land on
//! the same status tier.
//!
//! ## No Validation
//!
//! Inputs are never clamped or rejected. Negative pressure yields a negative
//! radius; a 0% leak rate zeroes every derived quantity except ambient noise.
//!
//! ```rust
//! use chemsentry_core::{LeakCategory, RiskAssessor, ScenarioConfig, Status, Weather};
//! use chemsentry_core::noise::FixedNoise;
//!
//! let config = ScenarioConfig {
//!     category: LeakCategory::CatastrophicBurst,
//!     weather: Weather::Clear,
//!     wind_speed: 20.0,
//!     pressure: 10.0,
//!     leak_rate: 50.0,
//!     ..ScenarioConfig::default()
//! };
//!
//! let snapshot = RiskAssessor::new(FixedNoise::low()).assess(&config, 3);
//! assert_eq!(snapshot.toxic_gas_level, 155.0);
//! assert_eq!(snapshot.status, Status::Critical);
//! ```

use crate::constants::severity::{
    AMBIENT_NOISE_MAX_PPM, FIRE_SURGE_MAX, FIRE_SURGE_MIN, LEAK_RATE_CALIBRATION_PCT,
    PRESSURE_GAS_PPM_PER_BAR, RADIUS_LEAK_RATE_DIVISOR_PCT, RADIUS_M_PER_BAR,
    RADIUS_M_PER_KMH_WIND, THERMAL_LEAK_RATE_DIVISOR_PCT,
};
use crate::constants::thresholds::{FINANCIAL_RISK_SEVERE, FINANCIAL_RISK_WARNING};
use crate::noise::{NoiseSource, RngNoise};
use crate::scenario::{LeakCategory, ScenarioConfig};
use crate::snapshot::{RiskSnapshot, Status};

/// Derives risk snapshots from scenarios
#[derive(Debug, Clone)]
pub struct RiskAssessor<N> {
    noise: N,
}

impl<N: NoiseSource> RiskAssessor<N> {
    /// Create an assessor drawing random terms from `noise`
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Assess a scenario
    ///
    /// Never fails. `active_sensors` is copied into the snapshot unchanged.
    pub fn assess(&mut self, config: &ScenarioConfig, active_sensors: u32) -> RiskSnapshot {
        let toxic_gas_level = toxic_gas_level(config, &mut self.noise);
        let thermal_index = thermal_index(config, &mut self.noise);
        let status = Status::classify(config.category, toxic_gas_level, thermal_index);

        RiskSnapshot {
            status,
            toxic_gas_level,
            thermal_index,
            risk_radius: risk_radius(config),
            financial_risk: financial_risk(status, config.leak_rate),
            active_sensors,
        }
    }

    /// Give the noise source back
    pub fn into_inner(self) -> N {
        self.noise
    }
}

/// Assess a scenario with thread-local randomness
pub fn assess(config: &ScenarioConfig, active_sensors: u32) -> RiskSnapshot {
    RiskAssessor::new(RngNoise::thread()).assess(config, active_sensors)
}

/// Toxic gas concentration in ppm
///
/// With an incident: `(base + pressure * 0.5) * dispersion * intensity`.
/// Without one: ambient sensor jitter, uniform in `[0, 2)`.
pub fn toxic_gas_level<N: NoiseSource>(config: &ScenarioConfig, noise: &mut N) -> f64 {
    let base = config.category.base_severity_ppm();

    if base > 0.0 {
        (base + config.pressure * PRESSURE_GAS_PPM_PER_BAR)
            * config.weather.dispersion_factor()
            * config.intensity_multiplier()
    } else {
        noise.uniform(0.0, AMBIENT_NOISE_MAX_PPM)
    }
}

/// Heat-stress index
///
/// Ambient temperature, plus a random surge for chemical fires.
pub fn thermal_index<N: NoiseSource>(config: &ScenarioConfig, noise: &mut N) -> f64 {
    match config.category {
        LeakCategory::FireHazard => {
            let surge = noise.uniform(FIRE_SURGE_MIN, FIRE_SURGE_MAX);
            config.temperature + surge * (config.leak_rate / THERMAL_LEAK_RATE_DIVISOR_PCT)
        }
        _ => config.temperature,
    }
}

/// Evacuation radius in meters
///
/// Zero without an incident, otherwise `(wind * 12 + pressure * 8) * leakRate / 60`.
pub fn risk_radius(config: &ScenarioConfig) -> f64 {
    if config.category.base_severity_ppm() > 0.0 {
        (config.wind_speed * RADIUS_M_PER_KMH_WIND + config.pressure * RADIUS_M_PER_BAR)
            * (config.leak_rate / RADIUS_LEAK_RATE_DIVISOR_PCT)
    } else {
        0.0
    }
}

/// Financial exposure for a status tier, scaled by leak rate
pub fn financial_risk(status: Status, leak_rate: f64) -> f64 {
    let exposure = match status {
        Status::Secure => return 0.0,
        Status::Warning => FINANCIAL_RISK_WARNING,
        Status::Critical | Status::Evacuate => FINANCIAL_RISK_SEVERE,
    };

    exposure * (leak_rate / LEAK_RATE_CALIBRATION_PCT)
}
