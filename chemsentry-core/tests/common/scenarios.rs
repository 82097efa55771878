//! Pre-built incident scenarios with expected outcomes
//!
//! Covers each category under each kind of weather, plus the boundary
//! cases next to the status thresholds.

use chemsentry_core::{LeakCategory, ScenarioConfig, Status, Weather};

use super::scenario;

/// Scenario with its expected deterministic outcome
pub struct TestScenario {
    pub name: &'static str,
    pub config: ScenarioConfig,
    pub expected_status: Status,
    /// None for normal operations, where gas is sensor noise
    pub expected_gas_ppm: Option<f64>,
}

pub struct Scenarios;

impl Scenarios {
    /// Every pre-built scenario
    pub fn all() -> Vec<TestScenario> {
        vec![
            TestScenario {
                name: "quiet_night",
                config: scenario(LeakCategory::Normal, Weather::Clear, 5.0, 8.0, 75.0),
                expected_status: Status::Secure,
                expected_gas_ppm: None,
            },
            TestScenario {
                name: "normal_in_fog",
                config: scenario(LeakCategory::Normal, Weather::Fog, 0.0, 30.0, 100.0),
                expected_status: Status::Secure,
                expected_gas_ppm: None,
            },
            TestScenario {
                name: "pipe_burst_clear",
                config: scenario(LeakCategory::CatastrophicBurst, Weather::Clear, 20.0, 10.0, 50.0),
                expected_status: Status::Critical,
                expected_gas_ppm: Some(155.0),
            },
            TestScenario {
                name: "valve_leak_rain",
                config: scenario(LeakCategory::MinorLeak, Weather::Rain, 10.0, 5.0, 100.0),
                expected_status: Status::Warning,
                expected_gas_ppm: Some(45.5),
            },
            TestScenario {
                // (30 + 2) * 1.0 * 0.5 = 16
                name: "valve_leak_throttled",
                config: scenario(LeakCategory::MinorLeak, Weather::Clear, 10.0, 4.0, 25.0),
                expected_status: Status::Secure,
                expected_gas_ppm: Some(16.0),
            },
            TestScenario {
                // (30 + 5) * 1.2 * 2.0 = 84
                name: "valve_leak_fog_full_rate",
                config: scenario(LeakCategory::MinorLeak, Weather::Fog, 3.0, 10.0, 100.0),
                expected_status: Status::Critical,
                expected_gas_ppm: Some(84.0),
            },
            TestScenario {
                // (150 + 10) * 0.7 * 1.5 = 168
                name: "pipe_burst_storm",
                config: scenario(LeakCategory::CatastrophicBurst, Weather::Storm, 60.0, 20.0, 75.0),
                expected_status: Status::Critical,
                expected_gas_ppm: Some(168.0),
            },
            TestScenario {
                // (150 + 10) * 1.2 * 1.5 = 288
                name: "pipe_burst_fog",
                config: scenario(LeakCategory::CatastrophicBurst, Weather::Fog, 5.0, 20.0, 75.0),
                expected_status: Status::Evacuate,
                expected_gas_ppm: Some(288.0),
            },
            TestScenario {
                // (400 + 5) * 0.7 * 1.0 = 283.5
                name: "fire_in_rain",
                config: scenario(LeakCategory::FireHazard, Weather::Rain, 15.0, 10.0, 50.0),
                expected_status: Status::Evacuate,
                expected_gas_ppm: Some(283.5),
            },
            TestScenario {
                name: "fire_trickle",
                config: scenario(LeakCategory::FireHazard, Weather::Clear, 0.0, 0.0, 1.0),
                expected_status: Status::Evacuate,
                expected_gas_ppm: Some(8.0),
            },
        ]
    }
}
