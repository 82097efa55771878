//! Clock abstraction for forecast labels
//!
//! Forecast points are labelled with wall-clock times. The clock is a
//! trait so hosts read the local time while tests pin it:
//! - Local wall clock (the operator console)
//! - Fixed instant (tests, replays)

use core::fmt::Write;

use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Maximum length of a clock label ("23:59")
pub const LABEL_CAPACITY: usize = 8;

/// Clock label in `H:MM` form
pub type ClockLabel = heapless::String<LABEL_CAPACITY>;

/// Source of wall-clock time
pub trait TimeSource {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Clock pinned to `instant`
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Move the clock to `instant`
    pub fn set(&mut self, instant: NaiveDateTime) {
        self.instant = instant;
    }

    /// Move the clock forward by whole minutes
    pub fn advance_minutes(&mut self, minutes: i64) {
        self.instant += Duration::minutes(minutes);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

/// Format an instant as `H:MM`
///
/// Hours are not padded, minutes always are: `9:05`, `14:30`, `0:00`.
pub fn clock_label(instant: &NaiveDateTime) -> ClockLabel {
    let mut label = ClockLabel::new();
    // At most "23:59", well inside the capacity
    let _ = write!(label, "{}:{:02}", instant.hour(), instant.minute());
    label
}
