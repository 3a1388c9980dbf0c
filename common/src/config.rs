//! Layout constants and runtime watchface configuration.
//!
//! # Pre-computed Layout Constants
//!
//! Row positions are derived at compile time from the padding and row height,
//! so drawing code never recomputes them per tick.
//!
//! ```text
//!  y=0   ┌────────────────────┐
//!        │      PADDING       │
//!  y=12  ├────────────────────┤
//!        │  22 23 [00] 01 02  │  hours
//!  y=52  ├────────────────────┤
//!        │      PADDING       │
//!  y=64  ├────────────────────┤
//!        │  ...               │  minutes
//!  y=116 ├────────────────────┤
//!        │  ...               │  seconds or date
//!  y=156 └────────────────────┘
//! ```

use core::fmt;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Row Layout
// =============================================================================

/// Vertical gap above each row.
pub const ROW_PADDING: u32 = 12;

/// Height of each row.
pub const ROW_HEIGHT: u32 = 40;

/// Number of rows on screen (hours, minutes, seconds or date).
pub const ROW_COUNT: usize = 3;

/// Top edge of each row.
pub const ROW_TOPS: [i32; ROW_COUNT] = [
    ROW_PADDING as i32,
    (ROW_PADDING * 2 + ROW_HEIGHT) as i32,
    (ROW_PADDING * 3 + ROW_HEIGHT * 2) as i32,
];

/// Bounding rectangle of the row at `position` (0 = top).
pub const fn row_bounds(position: usize) -> Rectangle {
    Rectangle::new(Point::new(0, ROW_TOPS[position]), Size::new(SCREEN_WIDTH, ROW_HEIGHT))
}

// =============================================================================
// Slot Layout
// =============================================================================

/// Number of digit slots per row.
pub const SLOT_COUNT: usize = 5;

/// Index of the slot holding the current value.
pub const CENTER_SLOT: usize = SLOT_COUNT / 2;

/// Horizontal distance between slot centres. Slot `i` is centred at `i * SLOT_SPACING`,
/// so the outer slots are half clipped by the screen edges.
pub const SLOT_SPACING: i32 = 36;

/// Vertical anchor for digit text, relative to the row top.
pub const ROW_TEXT_CENTER_Y: i32 = (ROW_HEIGHT / 2) as i32;

/// Vertical nudge for the large centre digits.
pub const CENTER_SLOT_ADJUST_Y: i32 = -1;

/// Vertical nudge for the small side digits.
pub const SIDE_SLOT_ADJUST_Y: i32 = 3;

/// Horizontal centre of the screen, used for the date row.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Capacity of the date format string.
pub const DATE_FORMAT_CAPACITY: usize = 24;

/// Date format used when none is given ("Fri 16 Oct").
pub const DEFAULT_DATE_FORMAT: &str = "%a %d %b";

/// Invalid configuration input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// Date format longer than [`DATE_FORMAT_CAPACITY`] bytes.
    DateFormatTooLong { len: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::DateFormatTooLong { len } => {
                write!(f, "date format is {len} bytes, at most {DATE_FORMAT_CAPACITY} are supported")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Runtime watchface options.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WatchfaceConfig {
    /// Show the date in the third row instead of seconds (ticks once per minute).
    pub show_date: bool,
    /// Swap foreground and background colours.
    pub invert_colors: bool,
    /// 24-hour clock; when false hours above 12 are shown minus 12.
    pub clock_24h: bool,
    date_format: String<DATE_FORMAT_CAPACITY>,
}

impl WatchfaceConfig {
    /// Seconds row, normal colours, 24-hour clock, default date format.
    pub fn new() -> Self {
        let mut date_format = String::new();
        date_format.push_str(DEFAULT_DATE_FORMAT).ok();
        Self {
            show_date: false,
            invert_colors: false,
            clock_24h: true,
            date_format,
        }
    }

    /// Replace the date format.
    pub fn with_date_format(
        mut self,
        format: &str,
    ) -> Result<Self, ConfigError> {
        self.set_date_format(format)?;
        Ok(self)
    }

    /// Replace the date format in place. The old format is kept on error.
    pub fn set_date_format(
        &mut self,
        format: &str,
    ) -> Result<(), ConfigError> {
        let mut buf = String::new();
        buf.push_str(format)
            .map_err(|_| ConfigError::DateFormatTooLong { len: format.len() })?;
        self.date_format = buf;
        Ok(())
    }

    #[inline]
    pub fn date_format(&self) -> &str { &self.date_format }
}

impl Default for WatchfaceConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
