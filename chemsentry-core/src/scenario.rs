//! Scenario Configuration
//!
//! ## Overview
//!
//! A [`ScenarioConfig`] is everything the operator controls: the incident
//! category, the weather, wind, line pressure, ambient temperature, the leak
//! source and the leak rate. It is a plain owned value. The hosting
//! application keeps one, patches it with [`ScenarioUpdate`]s as the
//! operator moves controls, and passes it to the engine on every change.
//!
//! ## Wire Format
//!
//! The console exchanges scenarios as camelCase JSON. Category and weather
//! travel as their console labels, with short aliases accepted on input:
//!
//! ```json
//! {
//!   "scenario": "Catastrophic Pipe Burst",
//!   "weather": "fog",
//!   "windSpeed": 20,
//!   "windDirection": 90,
//!   "pressure": 10,
//!   "temperature": 25,
//!   "leakSourceId": "B",
//!   "leakRate": 50
//! }
//! ```
//!
//! Missing fields take the console's initial values (see [`ScenarioConfig::default`]).
//!
//! ## No Validation
//!
//! Nothing here is clamped. A negative pressure or a 300% leak rate is a
//! well-formed scenario and flows through the engine arithmetic unchanged.

use serde::{Deserialize, Serialize};

use crate::constants::severity::{
    BASE_SEVERITY_CATASTROPHIC_PPM, BASE_SEVERITY_FIRE_PPM, BASE_SEVERITY_MINOR_LEAK_PPM,
    BASE_SEVERITY_NORMAL_PPM, DISPERSION_FOG, DISPERSION_NEUTRAL, DISPERSION_PRECIPITATION,
    LEAK_RATE_CALIBRATION_PCT,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::sector::MAIN_SOURCE_ID;

/// Incident category driving base severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeakCategory {
    /// Normal operations, no release
    #[default]
    #[serde(rename = "Normal Operations", alias = "normal")]
    Normal,
    /// Minor valve leak
    #[serde(rename = "Minor Valve Leak", alias = "minor")]
    MinorLeak,
    /// Catastrophic pipe burst
    #[serde(rename = "Catastrophic Pipe Burst", alias = "catastrophic")]
    CatastrophicBurst,
    /// Chemical fire hazard
    #[serde(rename = "Chemical Fire Hazard", alias = "fire")]
    FireHazard,
}

impl LeakCategory {
    /// Every category, in order of increasing severity
    pub const ALL: [LeakCategory; 4] = [
        LeakCategory::Normal,
        LeakCategory::MinorLeak,
        LeakCategory::CatastrophicBurst,
        LeakCategory::FireHazard,
    ];

    /// Base gas severity in ppm (direct table lookup)
    pub const fn base_severity_ppm(&self) -> f64 {
        match self {
            LeakCategory::Normal => BASE_SEVERITY_NORMAL_PPM,
            LeakCategory::MinorLeak => BASE_SEVERITY_MINOR_LEAK_PPM,
            LeakCategory::CatastrophicBurst => BASE_SEVERITY_CATASTROPHIC_PPM,
            LeakCategory::FireHazard => BASE_SEVERITY_FIRE_PPM,
        }
    }

    /// True for every category other than normal operations
    pub const fn is_incident(&self) -> bool {
        !matches!(self, LeakCategory::Normal)
    }

    /// Console label
    pub const fn label(&self) -> &'static str {
        match self {
            LeakCategory::Normal => "Normal Operations",
            LeakCategory::MinorLeak => "Minor Valve Leak",
            LeakCategory::CatastrophicBurst => "Catastrophic Pipe Burst",
            LeakCategory::FireHazard => "Chemical Fire Hazard",
        }
    }
}

/// Weather condition affecting gas dispersion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Weather {
    /// Clear sky
    #[default]
    #[serde(rename = "Clear Sky", alias = "clear")]
    Clear,
    /// Heavy rain
    #[serde(rename = "Heavy Rain", alias = "rain")]
    Rain,
    /// Dense fog
    #[serde(rename = "Dense Fog", alias = "fog")]
    Fog,
    /// Thunderstorm
    #[serde(rename = "Thunderstorm", alias = "storm")]
    Storm,
}

impl Weather {
    /// Every weather condition
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Rain, Weather::Fog, Weather::Storm];

    /// Multiplier applied to gas concentration
    ///
    /// Precipitation suppresses the plume, fog concentrates it, a clear sky
    /// is neutral. There is no fallback arm: a new condition must pick its
    /// factor here explicitly.
    pub const fn dispersion_factor(&self) -> f64 {
        match self {
            Weather::Rain | Weather::Storm => DISPERSION_PRECIPITATION,
            Weather::Fog => DISPERSION_FOG,
            Weather::Clear => DISPERSION_NEUTRAL,
        }
    }

    /// Console label
    pub const fn label(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear Sky",
            Weather::Rain => "Heavy Rain",
            Weather::Fog => "Dense Fog",
            Weather::Storm => "Thunderstorm",
        }
    }
}

/// Operator-controlled scenario parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioConfig {
    /// Incident category
    #[serde(rename = "scenario", alias = "category")]
    pub category: LeakCategory,

    /// Weather condition
    pub weather: Weather,

    /// Wind speed in km/h
    pub wind_speed: f64,

    /// Wind direction in degrees, wrapping at 360
    pub wind_direction: f64,

    /// Line pressure in bar
    pub pressure: f64,

    /// Ambient temperature in °C
    pub temperature: f64,

    /// `"MAIN"` or a facility sector id
    pub leak_source_id: String,

    /// Leak intensity in percent; 50 is the calibration midpoint
    pub leak_rate: f64,
}

impl Default for ScenarioConfig {
    /// The operator console's initial state
    fn default() -> Self {
        Self {
            category: LeakCategory::Normal,
            weather: Weather::Clear,
            wind_speed: 15.0,
            wind_direction: 90.0, // East
            pressure: 10.0,
            temperature: 25.0,
            leak_source_id: MAIN_SOURCE_ID.to_string(),
            leak_rate: 75.0,
        }
    }
}

impl ScenarioConfig {
    /// Decode a scenario from console JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(ConfigError::parse)
    }

    /// Encode the scenario as console JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string(self).map_err(ConfigError::encode)
    }

    /// Leak-rate scaling of severity: `leak_rate / 50`
    pub fn intensity_multiplier(&self) -> f64 {
        self.leak_rate / LEAK_RATE_CALIBRATION_PCT
    }

    /// Wind direction folded into [0, 360)
    pub fn wind_bearing(&self) -> f64 {
        self.wind_direction.rem_euclid(360.0)
    }

    /// Merge a partial update, returning whether anything changed
    pub fn apply(&mut self, update: ScenarioUpdate) -> bool {
        let before = self.clone();

        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(weather) = update.weather {
            self.weather = weather;
        }
        if let Some(wind_speed) = update.wind_speed {
            self.wind_speed = wind_speed;
        }
        if let Some(wind_direction) = update.wind_direction {
            self.wind_direction = wind_direction;
        }
        if let Some(pressure) = update.pressure {
            self.pressure = pressure;
        }
        if let Some(temperature) = update.temperature {
            self.temperature = temperature;
        }
        if let Some(leak_source_id) = update.leak_source_id {
            self.leak_source_id = leak_source_id;
        }
        if let Some(leak_rate) = update.leak_rate {
            self.leak_rate = leak_rate;
        }

        *self != before
    }
}

/// Partial scenario change, as emitted by a single console control
///
/// Unset fields leave the scenario untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioUpdate {
    /// New incident category
    #[serde(rename = "scenario", alias = "category")]
    pub category: Option<LeakCategory>,
    /// New weather condition
    pub weather: Option<Weather>,
    /// New wind speed in km/h
    pub wind_speed: Option<f64>,
    /// New wind direction in degrees
    pub wind_direction: Option<f64>,
    /// New line pressure in bar
    pub pressure: Option<f64>,
    /// New ambient temperature in °C
    pub temperature: Option<f64>,
    /// New leak source id
    pub leak_source_id: Option<String>,
    /// New leak rate in percent
    pub leak_rate: Option<f64>,
}

impl ScenarioUpdate {
    /// Decode a partial update from console JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(ConfigError::parse)
    }

    /// True if the update sets no field
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
