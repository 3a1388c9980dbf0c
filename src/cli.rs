//! Command-line options.
//!
//! Every option maps onto a [`WatchfaceConfig`] field or a host setting; the
//! same fields can be toggled from the keyboard while running.

use chrono::NaiveTime;
use clap::Parser;
use sliders_common::config::DEFAULT_DATE_FORMAT;
use sliders_common::{ConfigError, WatchfaceConfig};

use crate::config::DEFAULT_DEMO_START;

/// Sliders watchface in a desktop display simulator.
///
/// Keys: Y switch page, D date row, I invert colours, H 12/24 hour, Esc quit.
#[derive(Parser, Debug)]
#[command(name = "sliders", version, about)]
pub struct Args {
    /// Show the date instead of the seconds row
    #[arg(long)]
    pub date: bool,

    /// White strips on a dark screen
    #[arg(long)]
    pub invert: bool,

    /// Use a 12-hour clock
    #[arg(long)]
    pub twelve_hour: bool,

    /// strftime-like format for the date row (%a %A %b %B %d %e %m %y %Y %H %M %S)
    #[arg(long, value_name = "FORMAT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Run an accelerated demo clock starting at HH:MM:SS today
    #[arg(
        long,
        value_name = "HH:MM:SS",
        num_args = 0..=1,
        default_missing_value = DEFAULT_DEMO_START,
        value_parser = parse_time,
    )]
    pub demo: Option<NaiveTime>,

    /// Demo clock speed in simulated seconds per real second
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3600))]
    pub speed: u32,

    /// Window pixel scale
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,
}

impl Args {
    /// Watchface configuration selected by the flags.
    pub fn watchface_config(&self) -> Result<WatchfaceConfig, ConfigError> {
        let mut config = WatchfaceConfig::new().with_date_format(&self.date_format)?;
        config.show_date = self.date;
        config.invert_colors = self.invert;
        config.clock_24h = !self.twelve_hour;
        Ok(config)
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| format!("expected HH:MM:SS ({e})"))
}
