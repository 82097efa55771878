//! Common test utilities for integration tests
//!
//! This module provides:
//! - A pinned clock instant for forecast labels
//! - Scenario construction helpers
//! - Tolerance assertions for derived quantities

#![allow(dead_code, unused_macros)]

use chrono::{NaiveDate, NaiveDateTime};

use chemsentry_core::{LeakCategory, ScenarioConfig, Weather};

pub mod scenarios;

/// Monday morning shift start, 08:55
pub fn shift_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 2)
        .unwrap()
        .and_hms_opt(8, 55, 0)
        .unwrap()
}

/// Scenario with the given incident parameters and default ambient values
pub fn scenario(
    category: LeakCategory,
    weather: Weather,
    wind_speed: f64,
    pressure: f64,
    leak_rate: f64,
) -> ScenarioConfig {
    ScenarioConfig {
        category,
        weather,
        wind_speed,
        pressure,
        leak_rate,
        ..ScenarioConfig::default()
    }
}

/// Assert two values are within tolerance
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        assert!(
            (actual - expected).abs() <= $tolerance,
            "{} = {} not within {} of {}",
            stringify!($actual),
            actual,
            $tolerance,
            expected
        );
    }};
}
