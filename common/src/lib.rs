//! Platform-agnostic core of the Sliders watchface.
//!
//! This crate contains everything that does not depend on the host toolkit:
//!
//! - [`clock`]: Clock readings, calendar dates and tick units
//! - [`strip`]: The sliding five-slot digit window and two-digit formatting
//! - [`date`]: strftime-like date formatting into fixed buffers
//! - [`config`]: Layout constants and the runtime [`WatchfaceConfig`]
//! - [`colors`]: Monochrome palette (normal or inverted)
//! - [`styles`]: Pre-computed fonts and text styles
//! - [`rows`]: Row kinds and the dirty-row bit set
//! - [`render`]: [`WatchFace`] tick handling and redraw pass
//! - [`widgets`]: Row drawing, generic over `DrawTarget<Color = BinaryColor>`
//! - [`pages`]: Page navigation enum for the host
//! - [`profiling`]: Debug log ring buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free. Tests run with `std` enabled
//! (via `cfg_attr`) so the standard test harness is available.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod date;
pub mod pages;
pub mod profiling;
pub mod render;
pub mod rows;
pub mod strip;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use clock::{CalendarDate, ClockReading, TickUnit, TimeUnits, Weekday};
pub use config::{ConfigError, WatchfaceConfig};
pub use pages::Page;
pub use render::WatchFace;
pub use rows::{DirtyRows, RowKind};

#[cfg(test)]
pub(crate) mod testing;
