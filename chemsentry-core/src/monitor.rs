//! Scenario Monitor for Hosting Applications
//!
//! ## Overview
//!
//! The engine is stateless; something has to own the scenario and decide
//! when to call it. [`ScenarioMonitor`] is that owner for an operator
//! console. It holds the current [`ScenarioConfig`], the active sensor
//! count reported by the map, the selected sector, and the latest snapshot
//! and forecast.
//!
//! ## Recomputation Rules
//!
//! ```text
//! config or sensor count changed ──► assess ──► snapshot
//!                                                  │
//!     gas level or category changed ◄──────────────┘
//!                  │
//!                  ▼
//!              forecast
//! ```
//!
//! - Updates that change nothing trigger nothing.
//! - The forecast is rebuilt only when the snapshot's gas level or the
//!   scenario category moved. In normal operations the gas level is sensor
//!   noise, so every reassessment also refreshes the forecast.
//! - `assess` always runs before `forecast`.
//!
//! ## Example
//!
//! ```rust
//! use chemsentry_core::{LeakCategory, ScenarioMonitor, ScenarioUpdate, Status};
//! use chemsentry_core::noise::RngNoise;
//! use chemsentry_core::time::LocalClock;
//!
//! let mut monitor = ScenarioMonitor::new(Default::default(), RngNoise::thread(), LocalClock);
//! assert_eq!(monitor.snapshot().status, Status::Secure);
//!
//! monitor.apply(ScenarioUpdate {
//!     category: Some(LeakCategory::FireHazard),
//!     ..Default::default()
//! });
//! assert_eq!(monitor.snapshot().status, Status::Evacuate);
//! assert_eq!(monitor.forecast().len(), 13);
//! ```

use log::{debug, info, warn};

use crate::assessor::RiskAssessor;
use crate::forecast::{Forecast, ForecastGenerator};
use crate::noise::NoiseSource;
use crate::scenario::{LeakCategory, ScenarioConfig, ScenarioUpdate};
use crate::sector::{find_sector, LeakSource, Sector, FACILITY_SECTORS};
use crate::snapshot::{RiskSnapshot, Status};
use crate::time::TimeSource;

/// Owns a scenario and keeps its snapshot and forecast current
pub struct ScenarioMonitor<N, C> {
    config: ScenarioConfig,
    active_sensors: u32,
    selected_sector: Option<String>,
    sectors: &'static [Sector],

    snapshot: RiskSnapshot,
    forecast: Forecast,
    // Category the current forecast was built for
    forecast_category: LeakCategory,

    noise: N,
    clock: C,
}

impl<N: NoiseSource, C: TimeSource> ScenarioMonitor<N, C> {
    /// Start monitoring `config` with no active sensors
    pub fn new(config: ScenarioConfig, mut noise: N, clock: C) -> Self {
        let snapshot = RiskAssessor::new(&mut noise).assess(&config, 0);
        let forecast = ForecastGenerator::new(&mut noise).forecast(
            snapshot.toxic_gas_level,
            config.category,
            clock.now(),
        );

        debug!(
            "monitor started: {} / {}, status {}",
            config.category.label(),
            config.weather.label(),
            snapshot.status
        );

        Self {
            forecast_category: config.category,
            config,
            active_sensors: 0,
            selected_sector: None,
            sectors: &FACILITY_SECTORS,
            snapshot,
            forecast,
            noise,
            clock,
        }
    }

    /// Resolve leak sources and selections against a different sector list
    pub fn with_sectors(mut self, sectors: &'static [Sector]) -> Self {
        self.sectors = sectors;
        self
    }

    /// Merge a partial update; returns whether the scenario changed
    pub fn apply(&mut self, update: ScenarioUpdate) -> bool {
        let source_changed = update
            .leak_source_id
            .as_deref()
            .is_some_and(|id| id != self.config.leak_source_id);

        if !self.config.apply(update) {
            return false;
        }

        if source_changed {
            self.log_leak_source();
        }
        self.reassess();
        true
    }

    /// Replace the whole scenario; returns whether it changed
    pub fn set_config(&mut self, config: ScenarioConfig) -> bool {
        if config == self.config {
            return false;
        }

        let source_changed = config.leak_source_id != self.config.leak_source_id;
        self.config = config;

        if source_changed {
            self.log_leak_source();
        }
        self.reassess();
        true
    }

    /// Record the map's active sensor count; returns whether it changed
    pub fn set_active_sensors(&mut self, count: u32) -> bool {
        if count == self.active_sensors {
            return false;
        }

        self.active_sensors = count;
        self.reassess();
        true
    }

    /// Recompute the snapshot now, refreshing the forecast if it went stale
    pub fn reassess(&mut self) {
        let previous = self.snapshot;
        let snapshot = RiskAssessor::new(&mut self.noise).assess(&self.config, self.active_sensors);

        debug!(
            "reassessed {}: gas {:.1} ppm, thermal {:.1}, radius {:.0} m, wind {:.0} km/h @ {:.0}°",
            self.config.category.label(),
            snapshot.toxic_gas_level,
            snapshot.thermal_index,
            snapshot.risk_radius,
            self.config.wind_speed,
            self.config.wind_bearing()
        );

        if snapshot.status != previous.status {
            log_status_change(previous.status, snapshot.status);
        }

        let forecast_stale = snapshot.toxic_gas_level != previous.toxic_gas_level
            || self.config.category != self.forecast_category;

        self.snapshot = snapshot;

        if forecast_stale {
            self.forecast = ForecastGenerator::new(&mut self.noise).forecast(
                snapshot.toxic_gas_level,
                self.config.category,
                self.clock.now(),
            );
            self.forecast_category = self.config.category;
        }
    }

    /// Select a sector on the map, or clear the selection
    ///
    /// Ids that match no sector are kept; [`selected_sector`](Self::selected_sector)
    /// then reports nothing.
    pub fn select_sector(&mut self, id: Option<&str>) {
        self.selected_sector = id.map(str::to_string);
    }

    /// Currently selected sector
    pub fn selected_sector(&self) -> Option<&Sector> {
        self.selected_sector
            .as_deref()
            .and_then(|id| find_sector(self.sectors, id))
    }

    /// Where the leak originates
    pub fn leak_source(&self) -> LeakSource<'_> {
        LeakSource::resolve(&self.config.leak_source_id, self.sectors)
    }

    /// True when the leak is simulated somewhere other than the main facility
    pub fn is_simulation_active(&self) -> bool {
        !self.leak_source().is_main()
    }

    /// Current scenario
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Active sensor count last reported by the map
    pub fn active_sensors(&self) -> u32 {
        self.active_sensors
    }

    /// Latest snapshot
    pub fn snapshot(&self) -> &RiskSnapshot {
        &self.snapshot
    }

    /// Latest forecast
    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// Sector list used for lookups
    pub fn sectors(&self) -> &'static [Sector] {
        self.sectors
    }

    fn log_leak_source(&self) {
        match self.leak_source() {
            LeakSource::Unknown(id) => warn!("leak source {id:?} matches no sector"),
            source => info!("leak source set to {}", source.label()),
        }
    }
}

fn log_status_change(from: Status, to: Status) {
    if to == Status::Evacuate {
        warn!("status escalated {from} -> {to}");
    } else if to > from {
        info!("status escalated {from} -> {to}");
    } else {
        info!("status eased {from} -> {to}");
    }
}
