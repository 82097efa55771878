//! Gas Concentration Forecast
//!
//! ## Overview
//!
//! [`ForecastGenerator`] projects the current gas level one hour ahead in
//! five-minute steps. The result is always exactly
//! [`FORECAST_POINTS`](crate::constants::FORECAST_POINTS) points, offsets
//! 0 to 60 minutes inclusive, computed eagerly and never cached.
//!
//! ## Projection Model
//!
//! During an incident the projection follows a logistic ramp centred at 20
//! minutes:
//!
//! ```text
//! g(t)      = 1 / (1 + e^(-0.1 (t - 20)))
//! ppm(t)    = current * (0.5 + g(t))
//!
//!   1.5x |                         ___________
//!        |                   __----
//!   1.0x |- - - - - - - -_-*- - - - - - - - -   t = 20
//!        |           __--
//!   0.5x |______-----
//!        +----+----+----+----+----+----+----+
//!        0   10   20   30   40   50   60  min
//! ```
//!
//! In normal operations there is no trend: every point is independent
//! steady-state noise in `[0, 5)` ppm.
//!
//! Each value is rounded to one decimal place.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::forecast::{
    FORECAST_POINTS, FORECAST_ROUNDING_SCALE, FORECAST_STEP_MIN, GROWTH_BASELINE,
    GROWTH_MIDPOINT_MIN, GROWTH_STEEPNESS_PER_MIN, STEADY_STATE_NOISE_MAX_PPM,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::noise::{NoiseSource, RngNoise};
use crate::scenario::LeakCategory;
use crate::time::{clock_label, ClockLabel};

/// One sample of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Minutes after the forecast instant
    pub offset_min: u32,
    /// Wall-clock time of the sample, `H:MM`
    pub timestamp_label: ClockLabel,
    /// Projected gas level in ppm, one decimal place
    pub predicted_ppm: f64,
}

/// Complete one-hour projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forecast {
    points: [ForecastPoint; FORECAST_POINTS],
}

impl Forecast {
    /// Points in chronological order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Iterate over points in chronological order
    pub fn iter(&self) -> core::slice::Iter<'_, ForecastPoint> {
        self.points.iter()
    }

    /// Number of points, always [`FORECAST_POINTS`]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a forecast is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Point with the highest projected value
    pub fn peak(&self) -> &ForecastPoint {
        let mut peak = &self.points[0];
        for point in &self.points[1..] {
            if point.predicted_ppm > peak.predicted_ppm {
                peak = point;
            }
        }
        peak
    }

    /// Encode as a JSON array for the chart collaborator
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string(self).map_err(ConfigError::encode)
    }
}

impl<'a> IntoIterator for &'a Forecast {
    type Item = &'a ForecastPoint;
    type IntoIter = core::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Projects gas levels forward in time
#[derive(Debug, Clone)]
pub struct ForecastGenerator<N> {
    noise: N,
}

impl<N: NoiseSource> ForecastGenerator<N> {
    /// Create a generator drawing steady-state noise from `noise`
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Project `current_ppm` over the next hour, starting at `now`
    pub fn forecast(
        &mut self,
        current_ppm: f64,
        category: LeakCategory,
        now: NaiveDateTime,
    ) -> Forecast {
        let noise = &mut self.noise;

        let points = core::array::from_fn(|step| {
            let offset_min = step as u32 * FORECAST_STEP_MIN;
            let instant = now + Duration::minutes(i64::from(offset_min));

            let predicted = if category.is_incident() {
                current_ppm * (GROWTH_BASELINE + growth_factor(f64::from(offset_min)))
            } else {
                noise.uniform(0.0, STEADY_STATE_NOISE_MAX_PPM)
            };

            ForecastPoint {
                offset_min,
                timestamp_label: clock_label(&instant),
                predicted_ppm: round_one_decimal(predicted),
            }
        });

        log::trace!(
            "forecast from {:.1} ppm ({}): {} points",
            current_ppm,
            category.label(),
            FORECAST_POINTS
        );

        Forecast { points }
    }
}

/// Forecast with thread-local randomness
pub fn forecast(current_ppm: f64, category: LeakCategory, now: NaiveDateTime) -> Forecast {
    ForecastGenerator::new(RngNoise::thread()).forecast(current_ppm, category, now)
}

/// Logistic growth at `offset_min` minutes
///
/// 0.5 at the midpoint, tending to 0 before it and 1 after it.
pub fn growth_factor(offset_min: f64) -> f64 {
    1.0 / (1.0 + libm::exp(-GROWTH_STEEPNESS_PER_MIN * (offset_min - GROWTH_MIDPOINT_MIN)))
}

fn round_one_decimal(value: f64) -> f64 {
    libm::round(value * FORECAST_ROUNDING_SCALE) / FORECAST_ROUNDING_SCALE
}
