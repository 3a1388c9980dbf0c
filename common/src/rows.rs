//! Row kinds and dirty-row tracking.

use crate::clock::{ClockReading, TimeUnits};

/// What a screen row displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowKind {
    Hours,
    Minutes,
    Seconds,
    /// Formatted date in place of the seconds row.
    Date,
}

impl RowKind {
    /// Bit used for this row in [`DirtyRows`].
    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Self::Hours => 1 << 0,
            Self::Minutes => 1 << 1,
            Self::Seconds => 1 << 2,
            Self::Date => 1 << 3,
        }
    }

    /// Short label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hours => "H",
            Self::Minutes => "M",
            Self::Seconds => "S",
            Self::Date => "D",
        }
    }
}

/// Visible rows, top to bottom.
pub const fn visible_rows(show_date: bool) -> [RowKind; 3] {
    if show_date {
        [RowKind::Hours, RowKind::Minutes, RowKind::Date]
    } else {
        [RowKind::Hours, RowKind::Minutes, RowKind::Seconds]
    }
}

/// Set of rows flagged for redraw.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DirtyRows(u8);

impl DirtyRows {
    pub const NONE: Self = Self(0);

    /// Rows marked by a tick carrying `reading`.
    ///
    /// The finest visible unit is always marked; coarser rows are marked only
    /// when every finer unit has just rolled over to zero.
    pub const fn for_tick(
        reading: &ClockReading,
        show_date: bool,
    ) -> Self {
        let mut dirty = Self::NONE;
        if show_date {
            dirty = dirty.with(RowKind::Minutes);
            if reading.minute == 0 {
                dirty = dirty.with(RowKind::Hours);
                if reading.hour == 0 {
                    dirty = dirty.with(RowKind::Date);
                }
            }
        } else {
            dirty = dirty.with(RowKind::Seconds);
            if reading.second == 0 {
                dirty = dirty.with(RowKind::Minutes);
                if reading.minute == 0 {
                    dirty = dirty.with(RowKind::Hours);
                }
            }
        }
        dirty
    }

    /// Visible rows whose unit appears in `units`.
    ///
    /// Covers hosts that skip readings (a coarse or accelerated timer), where
    /// a minute can change without a `second == 0` tick ever arriving.
    pub const fn for_units(
        units: TimeUnits,
        show_date: bool,
    ) -> Self {
        let mut dirty = Self::NONE;
        if units.intersects(TimeUnits::MINUTE) {
            dirty = dirty.with(RowKind::Minutes);
        }
        if units.intersects(TimeUnits::HOUR) {
            dirty = dirty.with(RowKind::Hours);
        }
        if show_date {
            if units.intersects(TimeUnits::DAY) {
                dirty = dirty.with(RowKind::Date);
            }
        } else if units.intersects(TimeUnits::SECOND) {
            dirty = dirty.with(RowKind::Seconds);
        }
        dirty
    }

    /// Every row in `rows`.
    pub const fn all_of(rows: &[RowKind; 3]) -> Self {
        Self::NONE.with(rows[0]).with(rows[1]).with(rows[2])
    }

    /// Copy of `self` with `row` added.
    #[inline]
    #[must_use]
    pub const fn with(
        self,
        row: RowKind,
    ) -> Self {
        Self(self.0 | row.bit())
    }

    /// Union of both sets.
    #[inline]
    #[must_use]
    pub const fn union(
        self,
        other: Self,
    ) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn merge(
        &mut self,
        other: Self,
    ) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn contains(
        self,
        row: RowKind,
    ) -> bool {
        self.0 & row.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// Number of rows in the set.
    #[inline]
    pub const fn count(self) -> u32 { self.0.count_ones() }

    /// Remove and return every row.
    #[inline]
    pub fn take(&mut self) -> Self { core::mem::take(self) }
}

// =============================================================================
// Tests
// =============================================================================
