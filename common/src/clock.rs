//! Clock readings delivered by the host timer service.
//!
//! A [`ClockReading`] is an immutable snapshot captured once per tick. The
//! host also reports which [`TimeUnits`] changed since the previous tick, and
//! the watchface subscribes at a fixed [`TickUnit`] granularity.

// =============================================================================
// Weekday
// =============================================================================

/// Day of the week, Sunday first (matches `tm_wday` numbering).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday from a Sunday-based index (0 = Sunday). Wraps modulo 7.
    pub const fn from_sunday_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Three-letter name ("Mon").
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Full name ("Monday").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

// =============================================================================
// Calendar Date
// =============================================================================

const MONTH_SHORT: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A validated Gregorian calendar date.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
    weekday: Weekday,
}

impl CalendarDate {
    /// 1 January 2000, a Saturday. Used where a reading carries no real date.
    pub const EPOCH: Self = Self {
        year: 2000,
        month: 1,
        day: 1,
        weekday: Weekday::Saturday,
    };

    /// Build a date, returning `None` if month or day are out of range.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
    ) -> Option<Self> {
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            weekday: weekday_of(year, month, day),
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 { self.year }

    /// Month, 1-12.
    #[inline]
    pub const fn month(&self) -> u8 { self.month }

    /// Day of month, 1-31.
    #[inline]
    pub const fn day(&self) -> u8 { self.day }

    #[inline]
    pub const fn weekday(&self) -> Weekday { self.weekday }

    /// Three-letter month name ("Oct").
    pub const fn month_short_name(&self) -> &'static str { MONTH_SHORT[(self.month - 1) as usize] }

    /// Full month name ("October").
    pub const fn month_name(&self) -> &'static str { MONTH_NAMES[(self.month - 1) as usize] }
}

/// Gregorian leap year rule.
pub const fn is_leap_year(year: u16) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

/// Number of days in `month` (1-12) of `year`. Returns 0 for invalid months.
pub const fn days_in_month(
    year: u16,
    month: u8,
) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday via Sakamoto's method. Inputs must already be validated.
const fn weekday_of(
    year: u16,
    month: u8,
    day: u8,
) -> Weekday {
    const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    // Shift by one 400-year cycle (a whole number of weeks) so year 0 cannot underflow
    let y = if month < 3 { year as u32 + 399 } else { year as u32 + 400 };
    let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day as u32) % 7;
    Weekday::from_sunday_index(dow as u8)
}

// =============================================================================
// Clock Reading
// =============================================================================

/// Immutable time snapshot captured once per tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockReading {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Calendar date the reading belongs to.
    pub date: CalendarDate,
}

impl ClockReading {
    /// Build a reading, returning `None` if a time field is out of range.
    pub const fn new(
        date: CalendarDate,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            date,
        })
    }

    /// Reading for a bare time of day, dated [`CalendarDate::EPOCH`].
    pub const fn from_hms(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        Self::new(CalendarDate::EPOCH, hour, minute, second)
    }
}

// =============================================================================
// Tick Units
// =============================================================================

/// Granularity the watchface subscribes to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickUnit {
    Second,
    Minute,
}

impl TickUnit {
    /// The change mask that a tick at this granularity must intersect.
    pub const fn units(self) -> TimeUnits {
        match self {
            Self::Second => TimeUnits::ALL,
            Self::Minute => TimeUnits(TimeUnits::MINUTE.0 | TimeUnits::HOUR.0 | TimeUnits::DAY.0),
        }
    }
}

/// Bit mask of time units that changed between two readings.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: Self = Self(0);
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Units that differ between `prev` and `now`. A missing `prev` reports all units.
    pub fn changed(
        prev: Option<&ClockReading>,
        now: &ClockReading,
    ) -> Self {
        let Some(prev) = prev else {
            return Self::ALL;
        };
        let mut units = Self::NONE;
        if prev.second != now.second {
            units = units | Self::SECOND;
        }
        if prev.minute != now.minute {
            units = units | Self::MINUTE;
        }
        if prev.hour != now.hour {
            units = units | Self::HOUR;
        }
        if prev.date != now.date {
            units = units | Self::DAY;
        }
        units
    }

    #[inline]
    pub const fn intersects(
        self,
        other: Self,
    ) -> bool {
        self.0 & other.0 != 0
    }
}

impl core::ops::BitOr for TimeUnits {
    type Output = Self;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self {
        Self(self.0 | rhs.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
