//! Host timing and window configuration.
//!
//! These constants use `std::time::Duration` which is not available in the
//! `no_std` common crate, so they are defined here.

use std::time::Duration;

/// Target frame time (20 FPS). Ticks are detected by polling the clock
/// source once per frame, so this bounds tick latency.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Window title.
pub const WINDOW_TITLE: &str = "Sliders";

/// Starting time for `--demo` without a value: ten seconds before midnight,
/// so every row rolls over almost immediately.
pub const DEFAULT_DEMO_START: &str = "23:59:50";
