//! Profiling metrics with time-based measurements.
//!
//! Provides frame timing statistics and tick/redraw counters.
//! The `DebugLog` type is in the common crate since it doesn't need time.

use std::time::{Duration, Instant};

use heapless::String;
use sliders_common::profiling::push_u32;
use sliders_common::strip::format_two_digits;

/// Frame timing and render statistics for profiling.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_max_us: u32,

    // Counters
    pub total_frames: u64,
    pub ticks: u32,
    pub row_draws: u32,
    pub full_redraws: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new profiling metrics.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_max_us: 0,
            total_frames: 0,
            ticks: 0,
            row_draws: 0,
            full_redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;
        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        if total_us > self.frame_time_max_us {
            self.frame_time_max_us = total_us;
        }

        self.total_frames += 1;
    }

    /// Get uptime since metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }

    #[inline]
    pub fn inc_ticks(&mut self) { self.ticks += 1; }

    #[inline]
    pub fn inc_row_draws(
        &mut self,
        n: u32,
    ) {
        self.row_draws += n;
    }

    #[inline]
    pub fn inc_full_redraws(&mut self) { self.full_redraws += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format a second count as HH:MM:SS. Hours beyond 99 keep growing digits.
pub fn format_hms(total_secs: u64) -> String<12> {
    let hours = total_secs / 3600;
    let mins = ((total_secs % 3600) / 60) as u8;
    let secs = (total_secs % 60) as u8;

    let mut s = String::new();
    if hours < 10 {
        s.push('0').ok();
    }
    push_u32(&mut s, hours as u32);
    s.push(':').ok();
    s.push_str(&format_two_digits(mins)).ok();
    s.push(':').ok();
    s.push_str(&format_two_digits(secs)).ok();
    s
}
