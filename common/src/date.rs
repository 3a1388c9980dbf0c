//! strftime-like date formatting into fixed-capacity strings.
//!
//! Supported specifiers:
//!
//! | Code | Output            |
//! |------|-------------------|
//! | `%a` | `Fri`             |
//! | `%A` | `Friday`          |
//! | `%b` | `Oct`             |
//! | `%B` | `October`         |
//! | `%d` | `06` (zero pad)   |
//! | `%e` | ` 6` (space pad)  |
//! | `%m` | `10`              |
//! | `%y` | `26`              |
//! | `%Y` | `2026`            |
//! | `%H` | hour, `00`-`23`   |
//! | `%M` | minute            |
//! | `%S` | second            |
//! | `%%` | `%`               |
//!
//! Unknown specifiers are copied through verbatim. Output that does not fit
//! the buffer is truncated.

use heapless::String;

use crate::clock::ClockReading;
use crate::profiling::push_u32;
use crate::strip::format_two_digits;

/// Longest date string the date row renders.
pub const DATE_TEXT_CAPACITY: usize = 32;

/// Expand `format` for `reading` into `out` (appending).
pub fn format_date<const N: usize>(
    reading: &ClockReading,
    format: &str,
    out: &mut String<N>,
) {
    let date = &reading.date;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c).ok();
            continue;
        }
        let Some(code) = chars.next() else {
            out.push('%').ok();
            break;
        };
        match code {
            'a' => push_str(out, date.weekday().short_name()),
            'A' => push_str(out, date.weekday().name()),
            'b' => push_str(out, date.month_short_name()),
            'B' => push_str(out, date.month_name()),
            'd' => push_str(out, &format_two_digits(date.day())),
            'e' => {
                if date.day() < 10 {
                    out.push(' ').ok();
                }
                push_u32(out, u32::from(date.day()));
            }
            'm' => push_str(out, &format_two_digits(date.month())),
            'y' => push_str(out, &format_two_digits((date.year() % 100) as u8)),
            'Y' => push_u32(out, u32::from(date.year())),
            'H' => push_str(out, &format_two_digits(reading.hour)),
            'M' => push_str(out, &format_two_digits(reading.minute)),
            'S' => push_str(out, &format_two_digits(reading.second)),
            '%' => {
                out.push('%').ok();
            }
            other => {
                out.push('%').ok();
                out.push(other).ok();
            }
        }
    }
}

/// Whether `format` prints a time of day (`%H`, `%M` or `%S`).
///
/// A date row with such a format changes every minute, not only at midnight.
pub fn uses_time_fields(format: &str) -> bool {
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '%' && matches!(chars.next(), Some('H' | 'M' | 'S')) {
            return true;
        }
    }
    false
}

/// Convenience wrapper returning a fresh [`DATE_TEXT_CAPACITY`] string.
pub fn date_text(
    reading: &ClockReading,
    format: &str,
) -> String<DATE_TEXT_CAPACITY> {
    let mut out = String::new();
    format_date(reading, format, &mut out);
    out
}

/// Push as much of `s` as fits, one character at a time.
fn push_str<const N: usize>(
    out: &mut String<N>,
    s: &str,
) {
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
