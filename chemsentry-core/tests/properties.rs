//! Property tests for the risk engine
//!
//! Checks invariants that must hold across the whole input space rather
//! than at hand-picked points.

use proptest::prelude::*;

use chemsentry_core::{
    assessor::financial_risk,
    noise::FixedNoise,
    ForecastGenerator, LeakCategory, RiskAssessor, ScenarioConfig, Status, Weather,
};

mod common;

fn category() -> impl Strategy<Value = LeakCategory> {
    prop::sample::select(LeakCategory::ALL.to_vec())
}

fn weather() -> impl Strategy<Value = Weather> {
    prop::sample::select(Weather::ALL.to_vec())
}

prop_compose! {
    fn scenario()(
        category in category(),
        weather in weather(),
        wind_speed in 0.0..120.0f64,
        pressure in 0.0..100.0f64,
        temperature in -30.0..60.0f64,
        leak_rate in 0.0..=100.0f64,
    ) -> ScenarioConfig {
        ScenarioConfig {
            category,
            weather,
            wind_speed,
            pressure,
            temperature,
            leak_rate,
            ..ScenarioConfig::default()
        }
    }
}

proptest! {
    #[test]
    fn normal_operations_are_always_secure(
        mut config in scenario(),
        fraction in 0.0..1.0f64,
    ) {
        config.category = LeakCategory::Normal;
        let snapshot = RiskAssessor::new(FixedNoise::new(fraction)).assess(&config, 0);

        prop_assert_eq!(snapshot.status, Status::Secure);
        prop_assert_eq!(snapshot.risk_radius, 0.0);
        prop_assert_eq!(snapshot.financial_risk, 0.0);
        prop_assert_eq!(snapshot.thermal_index, config.temperature);
        prop_assert!((0.0..2.0).contains(&snapshot.toxic_gas_level));
    }

    #[test]
    fn fire_always_evacuates(mut config in scenario(), fraction in 0.0..1.0f64) {
        config.category = LeakCategory::FireHazard;
        let snapshot = RiskAssessor::new(FixedNoise::new(fraction)).assess(&config, 0);

        prop_assert_eq!(snapshot.status, Status::Evacuate);
    }

    #[test]
    fn status_is_monotonic_in_gas(
        category in category(),
        thermal in -30.0..300.0f64,
        gas in 0.0..500.0f64,
        extra in 0.0..500.0f64,
    ) {
        let lower = Status::classify(category, gas, thermal);
        let higher = Status::classify(category, gas + extra, thermal);

        prop_assert!(higher >= lower);
    }

    #[test]
    fn financial_risk_zero_iff_secure(config in scenario(), sensors in 0u32..64) {
        prop_assume!(config.leak_rate > 0.0);
        let snapshot = RiskAssessor::new(FixedNoise::low()).assess(&config, sensors);

        prop_assert_eq!(snapshot.financial_risk == 0.0, snapshot.status == Status::Secure);
        prop_assert_eq!(snapshot.active_sensors, sensors);
    }

    #[test]
    fn financial_risk_grows_with_leak_rate(
        rate in 0.0..100.0f64,
        step in 0.1..50.0f64,
    ) {
        for status in [Status::Warning, Status::Critical, Status::Evacuate] {
            prop_assert!(financial_risk(status, rate + step) > financial_risk(status, rate));
        }
        prop_assert_eq!(financial_risk(Status::Secure, rate + step), 0.0);
    }

    #[test]
    fn forecast_shape(
        current in 0.0..1_000.0f64,
        category in category(),
        fraction in 0.0..1.0f64,
    ) {
        let forecast = ForecastGenerator::new(FixedNoise::new(fraction))
            .forecast(current, category, common::shift_start());

        prop_assert_eq!(forecast.len(), 13);
        for (step, point) in forecast.iter().enumerate() {
            prop_assert_eq!(point.offset_min as usize, step * 5);
            prop_assert!(point.predicted_ppm >= 0.0);
            let scaled = point.predicted_ppm * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }
}
