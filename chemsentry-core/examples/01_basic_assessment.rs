//! Basic Risk Assessment Example
//!
//! This example demonstrates the simplest use of ChemSentry: assessing a
//! handful of incident scenarios and printing the resulting snapshots.
//!
//! ## What You'll Learn
//!
//! - Building a scenario from its parameters
//! - Running the assessor
//! - Reading status tiers and derived quantities
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_assessment
//! ```

use chemsentry_core::{assess, LeakCategory, ScenarioConfig, Weather};

fn main() {
    println!("ChemSentry Basic Assessment Example");
    println!("===================================\n");

    let scenarios = [
        ("Normal shift", LeakCategory::Normal, Weather::Clear, 50.0),
        ("Valve leak in the rain", LeakCategory::MinorLeak, Weather::Rain, 100.0),
        ("Pipe burst, clear sky", LeakCategory::CatastrophicBurst, Weather::Clear, 50.0),
        ("Pipe burst in fog", LeakCategory::CatastrophicBurst, Weather::Fog, 75.0),
        ("Chemical fire", LeakCategory::FireHazard, Weather::Storm, 60.0),
    ];

    for (description, category, weather, leak_rate) in scenarios {
        let config = ScenarioConfig {
            category,
            weather,
            wind_speed: 20.0,
            pressure: 10.0,
            leak_rate,
            ..ScenarioConfig::default()
        };

        let snapshot = assess(&config, 0);

        println!("{description}");
        println!("  Category:       {} / {}", category.label(), weather.label());
        println!("  Status:         {}", snapshot.status);
        println!("  Toxic gas:      {:.1} ppm", snapshot.toxic_gas_level);
        println!("  Thermal index:  {:.1}", snapshot.thermal_index);
        println!("  Risk radius:    {:.0} m", snapshot.risk_radius);
        println!("  Financial risk: {:.0}", snapshot.financial_risk);
        println!();
    }
}
