//! Debug/profiling page rendering.
//!
//! ```text
//! DEBUG        UP 00:01:23
//! ─────────────────────────
//! FRAME 51ms MAX 58ms
//! RENDER 140us SLEEP 49ms
//! FRAMES 1660 FULL 2
//! TICKS 83 ROWS 97
//! MODE SEC 24H
//! NOW 12:34:56 LOG 9
//! ─────────────────────────
//! Clock: system
//! Tick 12:34:00 SM
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;
use sliders_common::config::SCREEN_WIDTH;
use sliders_common::profiling::DebugLog;
use sliders_common::strip::format_two_digits;
use sliders_common::styles::LABEL_FONT;
use sliders_common::{ClockReading, WatchfaceConfig};

use crate::profiling::ProfilingMetrics;

// =============================================================================
// Layout Constants
// =============================================================================

const HEADER_Y: i32 = 10;
const HEADER_DIVIDER_Y: i32 = 14;
const STATS_Y: i32 = 26;
const STAT_LINE_HEIGHT: i32 = 11;
const LOG_DIVIDER_Y: i32 = 88;
const LOG_Y: i32 = 100;
const LOG_LINE_HEIGHT: i32 = 10;
const LEFT_X: i32 = 2;
const UPTIME_X: i32 = 62;

const DEBUG_BG: BinaryColor = BinaryColor::Off;
const TEXT_COLOR: BinaryColor = BinaryColor::On;

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page.
///
/// Clears the display and renders the uptime header, frame and tick
/// statistics, the active configuration and the event log.
pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    config: &WatchfaceConfig,
    reading: Option<&ClockReading>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_stats(display, metrics, log, config, reading);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log(display, log);
}

fn draw_header<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(LABEL_FONT, TEXT_COLOR);
    Text::new("DEBUG", Point::new(LEFT_X, HEADER_Y), style)
        .draw(display)
        .ok();

    let mut uptime: String<24> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(UPTIME_X, HEADER_Y), style)
        .draw(display)
        .ok();
}

fn draw_stats<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    config: &WatchfaceConfig,
    reading: Option<&ClockReading>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(LABEL_FONT, TEXT_COLOR);
    let mut lines: [String<24>; 6] = Default::default();

    let _ = write!(
        lines[0],
        "FRAME {}ms MAX {}ms",
        metrics.frame_time_us / 1000,
        metrics.frame_time_max_us / 1000
    );
    let _ = write!(
        lines[1],
        "RENDER {}us SLEEP {}ms",
        metrics.render_time_us,
        metrics.sleep_time_us / 1000
    );
    let _ = write!(lines[2], "FRAMES {} FULL {}", metrics.total_frames, metrics.full_redraws);
    let _ = write!(lines[3], "TICKS {} ROWS {}", metrics.ticks, metrics.row_draws);
    let _ = write!(
        lines[4],
        "MODE {} {}{}",
        if config.show_date { "DATE" } else { "SEC" },
        if config.clock_24h { "24H" } else { "12H" },
        if config.invert_colors { " INV" } else { "" }
    );
    match reading {
        Some(now) => {
            let _ = write!(
                lines[5],
                "NOW {}:{}:{} LOG {}",
                format_two_digits(now.hour),
                format_two_digits(now.minute),
                format_two_digits(now.second),
                log.total()
            );
        }
        None => {
            let _ = write!(lines[5], "NOW --:--:-- LOG {}", log.total());
        }
    }

    for (i, line) in lines.iter().enumerate() {
        Text::new(line, Point::new(LEFT_X, STATS_Y + STAT_LINE_HEIGHT * i as i32), style)
            .draw(display)
            .ok();
    }
}

fn draw_log<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(LABEL_FONT, TEXT_COLOR);
    for (i, line) in log.iter().enumerate() {
        Text::new(line, Point::new(LEFT_X, LOG_Y + LOG_LINE_HEIGHT * i as i32), style)
            .draw(display)
            .ok();
    }
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32 - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(TEXT_COLOR, 1))
        .draw(display)
        .ok();
}
