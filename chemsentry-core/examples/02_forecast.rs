//! Gas Forecast Example
//!
//! Projects an incident's gas level over the next hour and prints a small
//! text chart.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_forecast
//! ```

use chemsentry_core::{
    noise::RngNoise, time::{LocalClock, TimeSource}, ForecastGenerator, LeakCategory, RiskAssessor,
    ScenarioConfig, Weather,
};

fn main() {
    println!("ChemSentry Forecast Example");
    println!("===========================\n");

    let config = ScenarioConfig {
        category: LeakCategory::CatastrophicBurst,
        weather: Weather::Fog,
        wind_speed: 12.0,
        pressure: 15.0,
        leak_rate: 60.0,
        ..ScenarioConfig::default()
    };

    // Seeded so repeated runs print the same chart
    let mut noise = RngNoise::seeded(7);
    let snapshot = RiskAssessor::new(&mut noise).assess(&config, 0);
    let forecast = ForecastGenerator::new(&mut noise).forecast(
        snapshot.toxic_gas_level,
        config.category,
        LocalClock.now(),
    );

    println!(
        "Current: {:.1} ppm ({}), peak {:.1} ppm at +{} min\n",
        snapshot.toxic_gas_level,
        snapshot.status,
        forecast.peak().predicted_ppm,
        forecast.peak().offset_min
    );

    let scale = forecast.peak().predicted_ppm.max(1.0);
    for point in &forecast {
        let width = (point.predicted_ppm / scale * 40.0).round() as usize;
        println!(
            "{:>5} {:>7.1} |{}",
            point.timestamp_label.as_str(),
            point.predicted_ppm,
            "#".repeat(width)
        );
    }
}
