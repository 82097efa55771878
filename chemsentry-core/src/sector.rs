//! Facility Sectors
//!
//! Sectors are static rectangles on the facility map. The engine only uses
//! them to turn a `leakSourceId` into something an operator can read; the
//! numbers in a risk snapshot never depend on the sector.
//!
//! ```text
//!  (50,50)                 (350,50)
//!   +-----------+           +-----------+
//!   | A STORAGE |           | B PROCESS |
//!   +-----------+           +-----------+
//!  (50,230)                (350,230)
//!   +-----------+           +-----------+
//!   | C ADMIN   |           | D LOGIST. |
//!   +-----------+           +-----------+
//! ```

use serde::Serialize;

/// Leak source id meaning "the main facility", not a sector
pub const MAIN_SOURCE_ID: &str = "MAIN";

/// Rectangular zone on the facility map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sector {
    /// Short identifier, e.g. `"A"`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Left edge in map units
    pub x: f64,
    /// Top edge in map units
    pub y: f64,
    /// Width in map units
    pub width: f64,
    /// Height in map units
    pub height: f64,
}

/// The facility's four sectors
pub const FACILITY_SECTORS: [Sector; 4] = [
    Sector::new("A", "SECTOR A [STORAGE]", 50.0, 50.0, 200.0, 120.0),
    Sector::new("B", "SECTOR B [PROCESSING]", 350.0, 50.0, 200.0, 120.0),
    Sector::new("C", "SECTOR C [ADMIN]", 50.0, 230.0, 200.0, 120.0),
    Sector::new("D", "SECTOR D [LOGISTICS]", 350.0, 230.0, 200.0, 120.0),
];

impl Sector {
    /// Create a sector
    pub const fn new(
        id: &'static str,
        name: &'static str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self { id, name, x, y, width, height }
    }

    /// Whether a map point falls inside the sector
    ///
    /// Left and top edges are inclusive, right and bottom exclusive, so
    /// adjacent sectors never both claim a point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Look a sector up by id
pub fn find_sector<'a>(sectors: &'a [Sector], id: &str) -> Option<&'a Sector> {
    sectors.iter().find(|sector| sector.id == id)
}

/// Sector under a map point, if any
pub fn sector_at(sectors: &[Sector], x: f64, y: f64) -> Option<&Sector> {
    sectors.iter().find(|sector| sector.contains(x, y))
}

/// Resolved leak source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeakSource<'a> {
    /// The main facility
    Main,
    /// A known sector
    Sector(&'a Sector),
    /// An id that matches no sector; accepted as-is
    Unknown(&'a str),
}

impl<'a> LeakSource<'a> {
    /// Resolve a leak source id against a sector list
    pub fn resolve(id: &'a str, sectors: &'a [Sector]) -> Self {
        if id == MAIN_SOURCE_ID {
            return LeakSource::Main;
        }
        match find_sector(sectors, id) {
            Some(sector) => LeakSource::Sector(sector),
            None => LeakSource::Unknown(id),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'a str {
        match *self {
            LeakSource::Main => "MAIN FACILITY",
            LeakSource::Sector(sector) => sector.name,
            LeakSource::Unknown(id) => id,
        }
    }

    /// True for the facility-wide source
    pub fn is_main(&self) -> bool {
        matches!(self, LeakSource::Main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sectors_by_id() {
        let sector = find_sector(&FACILITY_SECTORS, "B").unwrap();
        assert_eq!(sector.name, "SECTOR B [PROCESSING]");
        assert!(find_sector(&FACILITY_SECTORS, "Z").is_none());
    }

    #[test]
    fn hit_testing() {
        assert_eq!(sector_at(&FACILITY_SECTORS, 60.0, 60.0).map(|s| s.id), Some("A"));
        assert_eq!(sector_at(&FACILITY_SECTORS, 549.0, 349.0).map(|s| s.id), Some("D"));
        // Gap between A and B
        assert!(sector_at(&FACILITY_SECTORS, 300.0, 100.0).is_none());
        // Right edge is exclusive
        assert!(sector_at(&FACILITY_SECTORS, 250.0, 100.0).is_none());
    }

    #[test]
    fn resolves_leak_sources() {
        assert!(LeakSource::resolve("MAIN", &FACILITY_SECTORS).is_main());
        assert_eq!(LeakSource::resolve("MAIN", &FACILITY_SECTORS).label(), "MAIN FACILITY");
        assert_eq!(LeakSource::resolve("C", &FACILITY_SECTORS).label(), "SECTOR C [ADMIN]");

        let unknown = LeakSource::resolve("X-9", &FACILITY_SECTORS);
        assert_eq!(unknown, LeakSource::Unknown("X-9"));
        assert_eq!(unknown.label(), "X-9");
    }
}
