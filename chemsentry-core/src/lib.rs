//! Core risk engine for ChemSentry
//!
//! Turns an operator-controlled hazard scenario into a facility risk
//! assessment and a one-hour gas forecast.
//!
//! Two components, both pure apart from injected randomness:
//! - [`RiskAssessor`]: scenario + active sensor count → [`RiskSnapshot`]
//! - [`ForecastGenerator`]: current gas level + category → [`Forecast`]
//!
//! [`ScenarioMonitor`] wires them together for a hosting console that owns
//! the scenario and wants recomputation only when inputs change.
//!
//! ```no_run
//! use chemsentry_core::{assess, forecast, LeakCategory, ScenarioConfig};
//!
//! let config = ScenarioConfig {
//!     category: LeakCategory::MinorLeak,
//!     ..ScenarioConfig::default()
//! };
//!
//! let snapshot = assess(&config, 4);
//! let projection = forecast(snapshot.toxic_gas_level, config.category, chrono::Local::now().naive_local());
//!
//! println!("{} at {:.1} ppm", snapshot.status, snapshot.toxic_gas_level);
//! for point in &projection {
//!     println!("{} {:>6.1}", point.timestamp_label, point.predicted_ppm);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assessor;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod monitor;
pub mod noise;
pub mod scenario;
pub mod sector;
pub mod snapshot;
pub mod time;

// Public API
pub use assessor::{assess, RiskAssessor};
pub use errors::{ConfigError, ConfigResult};
pub use forecast::{forecast, Forecast, ForecastGenerator, ForecastPoint};
pub use monitor::ScenarioMonitor;
pub use noise::NoiseSource;
pub use scenario::{LeakCategory, ScenarioConfig, ScenarioUpdate, Weather};
pub use sector::{LeakSource, Sector, FACILITY_SECTORS, MAIN_SOURCE_ID};
pub use snapshot::{RiskSnapshot, Status};
pub use time::TimeSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
