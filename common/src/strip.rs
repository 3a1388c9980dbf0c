//! Sliding digit window arithmetic.
//!
//! Each row shows five values around the current one: `base-2 .. base+2`,
//! wrapped into `[0, modulus)`. The centre slot always holds `base`.
//!
//! ```text
//! hours, base = 0, modulus = 24:   22  23  [00]  01  02
//! ```

use heapless::String;

use crate::clock::ClockReading;
use crate::config::{CENTER_SLOT, SLOT_COUNT};
use crate::rows::RowKind;

/// Hours wrap modulus.
pub const HOURS_MODULUS: u8 = 24;

/// Minutes and seconds wrap modulus.
pub const SIXTY_MODULUS: u8 = 60;

/// One digit position in a row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitSlot {
    /// Position in the row, 0-4.
    pub index: usize,
    pub value: u8,
    /// Whether this is the current-value slot (index 2).
    pub is_center: bool,
}

/// Five values `(base - 2 + i + offset) mod modulus`, normalised into `[0, modulus)`.
///
/// `modulus` must be non-zero.
pub fn compute_window(
    base: u8,
    modulus: u8,
    offset: i8,
) -> [u8; SLOT_COUNT] {
    debug_assert!(modulus > 0, "window modulus must be non-zero");
    let modulus = i32::from(modulus);
    let mut window = [0u8; SLOT_COUNT];
    for (i, slot) in window.iter_mut().enumerate() {
        let raw = i32::from(base) - CENTER_SLOT as i32 + i as i32 + i32::from(offset);
        *slot = raw.rem_euclid(modulus) as u8;
    }
    window
}

/// 12-hour display transform, applied after the modulus-24 wrap.
///
/// Values above 12 lose 12; `0` and `12` are left as they are.
#[inline]
pub const fn to_twelve_hour(hour: u8) -> u8 { if hour > 12 { hour - 12 } else { hour } }

/// The five values shown in a digit row, or `None` for the date row.
pub fn row_values(
    kind: RowKind,
    reading: &ClockReading,
    clock_24h: bool,
) -> Option<[u8; SLOT_COUNT]> {
    match kind {
        RowKind::Hours => {
            let mut window = compute_window(reading.hour, HOURS_MODULUS, 0);
            if !clock_24h {
                for hour in &mut window {
                    *hour = to_twelve_hour(*hour);
                }
            }
            Some(window)
        }
        RowKind::Minutes => Some(compute_window(reading.minute, SIXTY_MODULUS, 0)),
        RowKind::Seconds => Some(compute_window(reading.second, SIXTY_MODULUS, 0)),
        RowKind::Date => None,
    }
}

/// The digit slots of a row, or `None` for the date row.
pub fn row_slots(
    kind: RowKind,
    reading: &ClockReading,
    clock_24h: bool,
) -> Option<[DigitSlot; SLOT_COUNT]> {
    let values = row_values(kind, reading, clock_24h)?;
    Some(core::array::from_fn(|index| DigitSlot {
        index,
        value: values[index],
        is_center: index == CENTER_SLOT,
    }))
}

/// Format `value` as exactly two zero-padded digits (no `format!` machinery).
///
/// Values of 100 or more keep their last two digits.
pub fn format_two_digits(value: u8) -> String<2> {
    let value = value % 100;
    let mut s = String::new();
    s.push((b'0' + value / 10) as char).ok();
    s.push((b'0' + value % 10) as char).ok();
    s
}

// =============================================================================
// Tests
// =============================================================================
