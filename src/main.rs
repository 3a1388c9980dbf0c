//! Sliders watchface simulator.
//!
//! Runs the watchface from `sliders-common` in an `embedded-graphics-simulator`
//! window. The main loop stands in for the watch's host toolkit: it polls a
//! clock source once per frame, delivers ticks to the [`WatchFace`] and runs
//! the redraw pass for dirty rows.
//!
//! # Keys
//!
//! - **Y**: Switch between the watchface and the debug page
//! - **D**: Toggle the date row
//! - **I**: Invert colours
//! - **H**: Toggle 12/24-hour clock
//! - **Esc**: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod cli;
mod clock_source;
mod config;
mod profiling;
mod screens;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use sliders_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use sliders_common::profiling::{DebugLog, LOG_LINE_LENGTH};
use sliders_common::strip::format_two_digits;
use sliders_common::{ClockReading, DirtyRows, Page, RowKind, TimeUnits, WatchFace, WatchfaceConfig};

use crate::cli::Args;
use crate::clock_source::{ClockSource, DemoClock, SystemClock};
use crate::config::{FRAME_TIME, WINDOW_TITLE};
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;

fn main() {
    let args = Args::parse();
    let config = match args.watchface_config() {
        Ok(config) => config,
        Err(err) => Args::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let mut clock: Box<dyn ClockSource> = match args.demo {
        Some(start) => Box::new(DemoClock::starting_today(start, args.speed)),
        None => Box::new(SystemClock),
    };

    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Default)
        .scale(args.scale)
        .build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let mut face = WatchFace::new(config);
    let mut current_page = Page::default();
    let mut last_reading: Option<ClockReading> = None;

    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    log_event(&mut debug_log, "Sliders started");
    log_event(&mut debug_log, clock.describe());

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            if current_page == Page::Watchface {
                                face.mark_all_dirty();
                                metrics.inc_full_redraws();
                            }
                            log_event(&mut debug_log, current_page.label());
                        }
                        Keycode::D => {
                            let mut next = face.config().clone();
                            next.show_date = !next.show_date;
                            log_event(&mut debug_log, if next.show_date { "Date row: ON" } else { "Date row: OFF" });
                            apply_config(&mut face, next, &mut metrics);
                        }
                        Keycode::I => {
                            let mut next = face.config().clone();
                            next.invert_colors = !next.invert_colors;
                            log_event(&mut debug_log, if next.invert_colors { "Invert: ON" } else { "Invert: OFF" });
                            apply_config(&mut face, next, &mut metrics);
                        }
                        Keycode::H => {
                            let mut next = face.config().clone();
                            next.clock_24h = !next.clock_24h;
                            log_event(&mut debug_log, if next.clock_24h { "Clock: 24h" } else { "Clock: 12h" });
                            apply_config(&mut face, next, &mut metrics);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Timer service: one tick per observed change of the reading
        if let Some(now) = clock.now()
            && last_reading != Some(now)
        {
            let units = TimeUnits::changed(last_reading.as_ref(), &now);
            let marked = face.on_tick(now, units);
            if !marked.is_empty() {
                metrics.inc_ticks();
                if marked.count() > 1 {
                    log_event(&mut debug_log, &tick_message(&now, marked, face.rows()));
                }
            }
            last_reading = Some(now);
        }

        // Redraw pass
        let render_start = Instant::now();
        match current_page {
            Page::Watchface => {
                let drawn = face.draw(&mut display);
                metrics.inc_row_draws(drawn);
            }
            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &debug_log, face.config(), face.reading());
            }
        }
        let render_time = render_start.elapsed();

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

/// Push an event to the on-screen log and echo it to stdout.
fn log_event(
    log: &mut DebugLog,
    msg: &str,
) {
    println!("{msg}");
    log.push(msg);
}

fn apply_config(
    face: &mut WatchFace,
    config: WatchfaceConfig,
    metrics: &mut ProfilingMetrics,
) {
    face.set_config(config);
    metrics.inc_full_redraws();
}

/// "Tick 12:00:00 HMS": the reading plus the labels of the rows it marked.
fn tick_message(
    now: &ClockReading,
    marked: DirtyRows,
    rows: [RowKind; 3],
) -> String<LOG_LINE_LENGTH> {
    let mut msg = String::new();
    let _ = write!(
        msg,
        "Tick {}:{}:{} ",
        format_two_digits(now.hour),
        format_two_digits(now.minute),
        format_two_digits(now.second)
    );
    for row in rows {
        if marked.contains(row) {
            msg.push_str(row.label()).ok();
        }
    }
    msg
}
