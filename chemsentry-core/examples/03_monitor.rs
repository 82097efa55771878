//! Scenario Monitor Example
//!
//! Simulates an operator working the console: each JSON patch is what a
//! sidebar control would emit. The monitor recomputes only when a patch
//! actually changes the scenario.
//!
//! The monitor reports status changes through the `log` facade. No logger
//! is installed here, so the example prints the snapshots itself.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_monitor
//! ```

use chemsentry_core::{
    noise::RngNoise, time::LocalClock, ScenarioConfig, ScenarioMonitor, ScenarioUpdate,
};

fn main() {
    println!("ChemSentry Monitor Example");
    println!("==========================\n");

    let mut monitor = ScenarioMonitor::new(ScenarioConfig::default(), RngNoise::thread(), LocalClock);

    let patches = [
        r#"{ "scenario": "Minor Valve Leak" }"#,
        r#"{ "leakRate": 75 }"#,
        r#"{ "weather": "Dense Fog" }"#,
        r#"{ "leakSourceId": "B" }"#,
        r#"{ "scenario": "Chemical Fire Hazard", "temperature": 35 }"#,
        r#"{ "leakRate": "max" }"#,
    ];

    for json in patches {
        let update = match ScenarioUpdate::from_json(json) {
            Ok(update) => update,
            Err(e) => {
                println!("{json:<60} rejected: {e}\n");
                continue;
            }
        };

        let changed = monitor.apply(update);
        let snapshot = monitor.snapshot();

        println!("{json:<60} changed: {changed}");
        println!(
            "  {:<9} gas {:>7.1} ppm  radius {:>6.0} m  source {}",
            snapshot.status.label(),
            snapshot.toxic_gas_level,
            snapshot.risk_radius,
            monitor.leak_source().label()
        );
        println!(
            "  forecast +60 min: {:.1} ppm\n",
            monitor.forecast().points()[12].predicted_ppm
        );
    }

    monitor.set_active_sensors(9);
    println!("Sensors reported by the map: {}", monitor.snapshot().active_sensors);
}
