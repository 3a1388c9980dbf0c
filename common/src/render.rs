//! Tick handling and the redraw pass.
//!
//! [`WatchFace`] owns the last clock reading and the set of dirty rows. The
//! host calls [`WatchFace::on_tick`] from its timer callback and
//! [`WatchFace::draw`] from its redraw pass; both run on the same thread.
//!
//! # Update Strategy
//!
//! | Row     | Seconds mode             | Date mode                 |
//! |---------|--------------------------|---------------------------|
//! | Seconds | Every tick               | Hidden                    |
//! | Minutes | `second == 0`            | Every tick                |
//! | Hours   | `second == 0, minute == 0` | `minute == 0`           |
//! | Date    | Hidden                   | `minute == 0, hour == 0`  |
//!
//! A date format that prints the time (`%H`, `%M`, `%S`) redraws the date
//! row on every tick instead.
//!
//! A full redraw (screen clear plus every row) happens on the first frame,
//! after a configuration change and whenever the host asks for one.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::{ClockReading, TickUnit, TimeUnits};
use crate::colors::Palette;
use crate::config::{WatchfaceConfig, row_bounds};
use crate::date::uses_time_fields;
use crate::rows::{DirtyRows, RowKind, visible_rows};
use crate::widgets::{draw_background, draw_row};

/// Watchface state: configuration, latest reading and pending redraws.
pub struct WatchFace {
    config: WatchfaceConfig,
    /// `None` until the first tick arrives.
    reading: Option<ClockReading>,
    dirty: DirtyRows,
    /// Whether the whole screen must be cleared before drawing rows.
    full_redraw: bool,
}

impl WatchFace {
    /// New face with every row pending, like a freshly shown window.
    pub fn new(config: WatchfaceConfig) -> Self {
        let dirty = DirtyRows::all_of(&visible_rows(config.show_date));
        Self {
            config,
            reading: None,
            dirty,
            full_redraw: true,
        }
    }

    #[inline]
    pub const fn config(&self) -> &WatchfaceConfig { &self.config }

    /// Last reading delivered by a tick.
    #[inline]
    pub const fn reading(&self) -> Option<&ClockReading> { self.reading.as_ref() }

    /// Rows waiting for the next redraw pass.
    #[inline]
    pub const fn dirty(&self) -> DirtyRows { self.dirty }

    /// Rows on screen, top to bottom.
    #[inline]
    pub const fn rows(&self) -> [RowKind; 3] { visible_rows(self.config.show_date) }

    /// Timer granularity this face needs.
    #[inline]
    pub const fn tick_unit(&self) -> TickUnit { if self.config.show_date { TickUnit::Minute } else { TickUnit::Second } }

    /// Handle a timer tick. Returns the rows this tick marked dirty.
    ///
    /// Rows follow the reading's rollovers (`second == 0` and so on), plus any
    /// unit the host reports as changed. Ticks whose `units` do not reach the
    /// subscribed granularity are ignored and leave the stored reading untouched.
    pub fn on_tick(
        &mut self,
        reading: ClockReading,
        units: TimeUnits,
    ) -> DirtyRows {
        if !units.intersects(self.tick_unit().units()) {
            return DirtyRows::NONE;
        }
        self.reading = Some(reading);
        let show_date = self.config.show_date;
        let mut marked = DirtyRows::for_tick(&reading, show_date).union(DirtyRows::for_units(units, show_date));
        if show_date && uses_time_fields(self.config.date_format()) {
            marked = marked.with(RowKind::Date);
        }
        self.dirty.merge(marked);
        marked
    }

    /// Replace the configuration and schedule a full redraw.
    pub fn set_config(
        &mut self,
        config: WatchfaceConfig,
    ) {
        self.config = config;
        self.mark_all_dirty();
    }

    /// Schedule a full redraw (e.g. after another page covered the screen).
    pub fn mark_all_dirty(&mut self) {
        self.dirty = DirtyRows::all_of(&self.rows());
        self.full_redraw = true;
    }

    /// Redraw every dirty row. Returns how many rows were drawn.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) -> u32
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.full_redraw {
            draw_background(display, Palette::for_inverted(self.config.invert_colors));
            self.full_redraw = false;
        }

        let dirty = self.dirty.take();
        let mut drawn = 0;
        for (position, kind) in self.rows().into_iter().enumerate() {
            if dirty.contains(kind) {
                draw_row(display, kind, row_bounds(position), self.reading.as_ref(), &self.config);
                drawn += 1;
            }
        }
        drawn
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{INVERTED, NORMAL};
    use crate::config::ROW_TOPS;
    use crate::testing::Canvas;

    fn reading(
        h: u8,
        m: u8,
        s: u8,
    ) -> ClockReading {
        ClockReading::from_hms(h, m, s).unwrap()
    }

    fn date_config() -> WatchfaceConfig {
        let mut config = WatchfaceConfig::new();
        config.show_date = true;
        config
    }

    #[test]
    fn test_new_face_has_all_rows_dirty() {
        let face = WatchFace::new(WatchfaceConfig::new());
        assert!(face.reading().is_none());
        assert_eq!(face.dirty().count(), 3);
        assert_eq!(face.tick_unit(), TickUnit::Second);
    }

    #[test]
    fn test_midnight_tick_marks_every_row() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let mut canvas = Canvas::filled(NORMAL.background);
        face.draw(&mut canvas);

        let marked = face.on_tick(reading(0, 0, 0), TimeUnits::ALL);
        assert!(marked.contains(RowKind::Hours));
        assert!(marked.contains(RowKind::Minutes));
        assert!(marked.contains(RowKind::Seconds));
    }

    #[test]
    fn test_plain_tick_marks_only_seconds() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let marked = face.on_tick(reading(5, 30, 1), TimeUnits::SECOND);
        assert_eq!(marked, DirtyRows::NONE.with(RowKind::Seconds));
        assert_eq!(face.reading(), Some(&reading(5, 30, 1)));
    }

    #[test]
    fn test_skipped_rollover_still_marks_minutes() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let marked = face.on_tick(reading(5, 31, 7), TimeUnits::SECOND | TimeUnits::MINUTE);
        assert!(marked.contains(RowKind::Minutes));
        assert!(!marked.contains(RowKind::Hours));
    }

    #[test]
    fn test_date_mode_rows_and_granularity() {
        let mut face = WatchFace::new(date_config());
        assert_eq!(face.rows(), [RowKind::Hours, RowKind::Minutes, RowKind::Date]);
        assert_eq!(face.tick_unit(), TickUnit::Minute);

        // A seconds-only tick is below the subscribed granularity
        assert!(face.on_tick(reading(5, 30, 1), TimeUnits::SECOND).is_empty());
        assert!(face.reading().is_none());

        let marked = face.on_tick(reading(0, 0, 0), TimeUnits::ALL);
        assert!(marked.contains(RowKind::Date));
        assert!(marked.contains(RowKind::Hours));
        assert!(marked.contains(RowKind::Minutes));
    }

    #[test]
    fn test_date_row_with_time_format_follows_minutes() {
        let config = date_config().with_date_format("%H:%M").unwrap();
        let mut face = WatchFace::new(config);
        face.on_tick(reading(5, 30, 0), TimeUnits::ALL);

        let marked = face.on_tick(reading(5, 31, 0), TimeUnits::SECOND | TimeUnits::MINUTE);
        assert!(marked.contains(RowKind::Date));
        assert!(marked.contains(RowKind::Minutes));
        assert!(!marked.contains(RowKind::Hours));
    }

    #[test]
    fn test_date_row_without_time_format_waits_for_midnight() {
        let mut face = WatchFace::new(date_config());
        face.on_tick(reading(5, 30, 0), TimeUnits::ALL);

        let marked = face.on_tick(reading(5, 31, 0), TimeUnits::SECOND | TimeUnits::MINUTE);
        assert!(!marked.contains(RowKind::Date));
    }

    #[test]
    fn test_draw_clears_dirty_rows() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let mut canvas = Canvas::filled(NORMAL.background);

        assert_eq!(face.draw(&mut canvas), 3);
        assert!(face.dirty().is_empty());
        assert_eq!(face.draw(&mut canvas), 0);

        face.on_tick(reading(5, 30, 1), TimeUnits::SECOND);
        assert_eq!(face.draw(&mut canvas), 1);
    }

    #[test]
    fn test_pending_rows_accumulate_between_draws() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let mut canvas = Canvas::filled(NORMAL.background);
        face.draw(&mut canvas);

        face.on_tick(reading(5, 30, 59), TimeUnits::SECOND);
        face.on_tick(reading(5, 31, 0), TimeUnits::SECOND | TimeUnits::MINUTE);
        assert_eq!(face.draw(&mut canvas), 2);
    }

    #[test]
    fn test_default_face_draws_white_window_and_dark_strips() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let mut canvas = Canvas::filled(BinaryColor::Off);
        face.draw(&mut canvas);

        // Padding above the first row, then the first pixel of the hours strip
        assert_eq!(canvas.pixel(0, 0), BinaryColor::On);
        assert_eq!(canvas.pixel(0, ROW_TOPS[0]), BinaryColor::Off);
    }

    #[test]
    fn test_set_config_redraws_everything() {
        let mut face = WatchFace::new(WatchfaceConfig::new());
        let mut canvas = Canvas::filled(NORMAL.background);
        face.on_tick(reading(5, 30, 1), TimeUnits::ALL);
        face.draw(&mut canvas);

        let mut inverted = WatchfaceConfig::new();
        inverted.invert_colors = true;
        face.set_config(inverted);
        assert_eq!(face.dirty().count(), 3);
        assert_eq!(face.draw(&mut canvas), 3);

        // Padding above the first row now shows the inverted window background
        assert_eq!(canvas.pixel(0, 0), INVERTED.background);
    }

    #[test]
    fn test_same_reading_draws_same_pixels() {
        let mut face_a = WatchFace::new(WatchfaceConfig::new());
        let mut face_b = WatchFace::new(WatchfaceConfig::new());
        let mut canvas_a = Canvas::filled(NORMAL.background);
        let mut canvas_b = Canvas::filled(NORMAL.background);

        face_a.on_tick(reading(12, 0, 0), TimeUnits::ALL);
        face_b.on_tick(reading(12, 0, 0), TimeUnits::ALL);
        face_a.draw(&mut canvas_a);
        face_b.draw(&mut canvas_b);
        face_b.mark_all_dirty();
        face_b.draw(&mut canvas_b);
        assert!(canvas_a == canvas_b);
    }
}
