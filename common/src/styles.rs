//! Font selection for the digit rows.
//!
//! Fonts are `const` references so styles can be built per draw call with
//! only the colour varying (the palette can flip at runtime).

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

/// Large bold-looking font for the current value (centre slot).
pub const CENTER_DIGIT_FONT: &MonoFont = &PROFONT_24_POINT;

/// Smaller font for the neighbouring values.
pub const SIDE_DIGIT_FONT: &MonoFont = &PROFONT_14_POINT;

/// Font for the date row.
pub const DATE_FONT: &MonoFont = &PROFONT_14_POINT;

/// Small font for the host's debug page.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Left-aligned text positioned by its top edge. Digit slots are positioned
/// from measured sizes, so they need top-left anchoring.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Horizontally centred text positioned by its vertical middle.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Font for a digit slot.
#[inline]
pub const fn digit_font(is_center: bool) -> &'static MonoFont<'static> {
    if is_center { CENTER_DIGIT_FONT } else { SIDE_DIGIT_FONT }
}
