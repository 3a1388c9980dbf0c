//! Time sources for the host timer service.
//!
//! - [`SystemClock`]: local wall-clock time
//! - [`DemoClock`]: starts at a chosen time and runs faster than real time

use std::time::{Duration, Instant};

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use sliders_common::{CalendarDate, ClockReading};

/// Something the host can poll for the current time.
pub trait ClockSource {
    /// Current reading, or `None` if the time cannot be represented.
    fn now(&mut self) -> Option<ClockReading>;

    /// Short description for the debug log.
    fn describe(&self) -> &'static str;
}

/// Convert a chrono timestamp into a watchface reading.
pub fn reading_from(dt: &NaiveDateTime) -> Option<ClockReading> {
    let year = u16::try_from(dt.year()).ok()?;
    let date = CalendarDate::new(year, dt.month() as u8, dt.day() as u8)?;
    ClockReading::new(date, dt.hour() as u8, dt.minute() as u8, dt.second() as u8)
}

// =============================================================================
// System Clock
// =============================================================================

/// Local time from the operating system.
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&mut self) -> Option<ClockReading> { reading_from(&Local::now().naive_local()) }

    fn describe(&self) -> &'static str { "Clock: system" }
}

// =============================================================================
// Demo Clock
// =============================================================================

/// Accelerated clock for watching rollovers without waiting.
pub struct DemoClock {
    start: NaiveDateTime,
    speed: u32,
    started: Instant,
}

impl DemoClock {
    /// Clock showing `start` now and advancing `speed` seconds per real second.
    pub fn new(
        start: NaiveDateTime,
        speed: u32,
    ) -> Self {
        Self {
            start,
            speed: speed.max(1),
            started: Instant::now(),
        }
    }

    /// Clock starting at `time` on today's local date.
    pub fn starting_today(
        time: NaiveTime,
        speed: u32,
    ) -> Self {
        Self::new(Local::now().date_naive().and_time(time), speed)
    }

    /// Simulated time after `elapsed` real time.
    pub fn at(
        &self,
        elapsed: Duration,
    ) -> Option<NaiveDateTime> {
        let millis = i64::try_from(elapsed.as_millis()).ok()?.checked_mul(i64::from(self.speed))?;
        self.start.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
    }
}

impl ClockSource for DemoClock {
    fn now(&mut self) -> Option<ClockReading> { reading_from(&self.at(self.started.elapsed())?) }

    fn describe(&self) -> &'static str { "Clock: demo" }
}
