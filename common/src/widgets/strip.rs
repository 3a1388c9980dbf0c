//! Sliding digit rows.
//!
//! A row is a solid strip in the palette foreground colour with five
//! two-digit numbers cut out of it in the background colour. Each number is
//! measured with its font and centred under slot `i` at `i * SLOT_SPACING`;
//! the centre slot uses the large font and a slightly higher baseline.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::clock::ClockReading;
use crate::colors::Palette;
use crate::config::{
    CENTER_SLOT_ADJUST_Y,
    CENTER_X,
    ROW_TEXT_CENTER_Y,
    SIDE_SLOT_ADJUST_Y,
    SLOT_COUNT,
    SLOT_SPACING,
    WatchfaceConfig,
};
use crate::date::date_text;
use crate::rows::RowKind;
use crate::strip::{DigitSlot, format_two_digits, row_slots};
use crate::styles::{CENTERED_MIDDLE, DATE_FONT, TOP_LEFT, digit_font};

/// A digit slot with its text and measured on-screen box.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlacedDigit {
    pub slot: DigitSlot,
    pub text: String<2>,
    /// Top-left corner of the text box, in screen coordinates.
    pub top_left: Point,
    /// Measured text size.
    pub size: Size,
}

/// Measure and position one slot inside a row whose top-left is `origin`.
pub fn layout_digit(
    slot: DigitSlot,
    origin: Point,
) -> PlacedDigit {
    let text = format_two_digits(slot.value);
    let style = MonoTextStyle::new(digit_font(slot.is_center), BinaryColor::On);
    let size = style
        .measure_string(&text, Point::zero(), Baseline::Top)
        .bounding_box
        .size;

    let adjust = if slot.is_center { CENTER_SLOT_ADJUST_Y } else { SIDE_SLOT_ADJUST_Y };
    let x = SLOT_SPACING * slot.index as i32 - size.width as i32 / 2;
    let y = ROW_TEXT_CENTER_Y - size.height as i32 / 2 + adjust;

    PlacedDigit {
        slot,
        text,
        top_left: origin + Point::new(x, y),
        size,
    }
}

/// Lay out the five digits of a row, or `None` for the date row.
pub fn layout_row(
    kind: RowKind,
    bounds: &Rectangle,
    reading: &ClockReading,
    clock_24h: bool,
) -> Option<[PlacedDigit; SLOT_COUNT]> {
    let slots = row_slots(kind, reading, clock_24h)?;
    Some(slots.map(|slot| layout_digit(slot, bounds.top_left)))
}

/// Clear the whole display to the window background.
pub fn draw_background<D>(
    display: &mut D,
    palette: Palette,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(palette.background).ok();
}

/// Draw one row into `bounds`.
///
/// The strip is always filled. Text is skipped while `reading` is `None`
/// (no tick has arrived yet). Drawing is clipped to `bounds`.
pub fn draw_row<D>(
    display: &mut D,
    kind: RowKind,
    bounds: Rectangle,
    reading: Option<&ClockReading>,
    config: &WatchfaceConfig,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let palette = Palette::for_inverted(config.invert_colors);
    let mut clipped = display.clipped(&bounds);

    bounds
        .into_styled(PrimitiveStyle::with_fill(palette.foreground))
        .draw(&mut clipped)
        .ok();

    let Some(reading) = reading else {
        return;
    };

    match kind {
        RowKind::Date => draw_date(&mut clipped, &bounds, reading, config, palette),
        RowKind::Hours | RowKind::Minutes | RowKind::Seconds => {
            if let Some(digits) = layout_row(kind, &bounds, reading, config.clock_24h) {
                for digit in &digits {
                    draw_digit(&mut clipped, digit, palette);
                }
            }
        }
    }
}

fn draw_digit<D>(
    display: &mut D,
    digit: &PlacedDigit,
    palette: Palette,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(digit_font(digit.slot.is_center), palette.background);
    Text::with_text_style(&digit.text, digit.top_left, style, TOP_LEFT)
        .draw(display)
        .ok();
}

fn draw_date<D>(
    display: &mut D,
    bounds: &Rectangle,
    reading: &ClockReading,
    config: &WatchfaceConfig,
    palette: Palette,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let text = date_text(reading, config.date_format());
    let position = Point::new(bounds.top_left.x + CENTER_X, bounds.top_left.y + ROW_TEXT_CENTER_Y);
    Text::with_text_style(&text, position, MonoTextStyle::new(DATE_FONT, palette.background), CENTERED_MIDDLE)
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{INVERTED, NORMAL};
    use crate::config::{CENTER_SLOT, ROW_HEIGHT, row_bounds};
    use crate::testing::Canvas;

    fn reading(
        h: u8,
        m: u8,
        s: u8,
    ) -> ClockReading {
        ClockReading::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_slots_centered_on_grid() {
        let bounds = row_bounds(1);
        let digits = layout_row(RowKind::Minutes, &bounds, &reading(12, 34, 56), true).unwrap();
        for (i, digit) in digits.iter().enumerate() {
            assert_eq!(
                digit.top_left.x + digit.size.width as i32 / 2,
                SLOT_SPACING * i as i32,
                "slot {i} not centred"
            );
        }
    }

    #[test]
    fn test_center_slot_uses_larger_font() {
        let bounds = row_bounds(0);
        let digits = layout_row(RowKind::Hours, &bounds, &reading(9, 0, 0), true).unwrap();
        let center = &digits[CENTER_SLOT];
        let side = &digits[0];
        assert!(center.size.width > side.size.width);
        assert!(center.size.height > side.size.height);
        assert_eq!(center.text.as_str(), "09");
        assert!(center.slot.is_center);
    }

    #[test]
    fn test_text_stays_inside_row() {
        for position in 0..3 {
            let bounds = row_bounds(position);
            let digits = layout_row(RowKind::Seconds, &bounds, &reading(0, 0, 0), true).unwrap();
            for digit in &digits {
                assert!(digit.top_left.y >= bounds.top_left.y);
                assert!(digit.top_left.y + digit.size.height as i32 <= bounds.top_left.y + ROW_HEIGHT as i32);
            }
        }
    }

    #[test]
    fn test_date_row_has_no_digit_layout() {
        assert!(layout_row(RowKind::Date, &row_bounds(2), &reading(0, 0, 0), true).is_none());
    }

    #[test]
    fn test_uninitialized_row_is_fill_only() {
        let bounds = row_bounds(0);
        let mut canvas = Canvas::filled(NORMAL.background);
        draw_row(&mut canvas, RowKind::Hours, bounds, None, &WatchfaceConfig::new());

        let area = (bounds.size.width * bounds.size.height) as usize;
        assert_eq!(canvas.count_in(&bounds, NORMAL.foreground), area);
    }

    #[test]
    fn test_digits_cut_out_of_strip() {
        let bounds = row_bounds(0);
        let mut canvas = Canvas::filled(NORMAL.background);
        draw_row(&mut canvas, RowKind::Hours, bounds, Some(&reading(10, 0, 0)), &WatchfaceConfig::new());
        assert!(canvas.count_in(&bounds, NORMAL.background) > 0);
    }

    #[test]
    fn test_drawing_is_clipped_to_row() {
        let bounds = row_bounds(1);
        let mut config = WatchfaceConfig::new();
        config.invert_colors = true;

        // Screen pre-filled with the strip colour, so stray text shows up as background pixels
        let mut canvas = Canvas::filled(INVERTED.foreground);
        draw_row(&mut canvas, RowKind::Minutes, bounds, Some(&reading(0, 44, 0)), &config);

        let total_text = canvas.count_in(&Rectangle::new(Point::zero(), canvas.size()), INVERTED.background);
        let row_text = canvas.count_in(&bounds, INVERTED.background);
        assert!(row_text > 0);
        assert_eq!(total_text, row_text);
    }

    #[test]
    fn test_render_is_idempotent() {
        let bounds = row_bounds(2);
        let config = WatchfaceConfig::new();
        let now = reading(23, 59, 58);

        let layout_a = layout_row(RowKind::Seconds, &bounds, &now, true);
        let layout_b = layout_row(RowKind::Seconds, &bounds, &now, true);
        assert_eq!(layout_a, layout_b);

        let mut canvas_a = Canvas::filled(NORMAL.background);
        let mut canvas_b = Canvas::filled(NORMAL.background);
        draw_row(&mut canvas_a, RowKind::Seconds, bounds, Some(&now), &config);
        draw_row(&mut canvas_b, RowKind::Seconds, bounds, Some(&now), &config);
        draw_row(&mut canvas_b, RowKind::Seconds, bounds, Some(&now), &config);
        assert!(canvas_a == canvas_b);
    }

    #[test]
    fn test_date_row_is_centered() {
        let bounds = row_bounds(2);
        let mut canvas = Canvas::filled(NORMAL.background);
        draw_row(&mut canvas, RowKind::Date, bounds, Some(&reading(8, 0, 0)), &WatchfaceConfig::new());

        // "Sat 01 Jan" is narrower than the screen, so both edges stay solid
        let left_edge = Rectangle::new(bounds.top_left, Size::new(10, bounds.size.height));
        let right_edge = Rectangle::new(bounds.top_left + Point::new(134, 0), Size::new(10, bounds.size.height));
        assert_eq!(canvas.count_in(&left_edge, NORMAL.background), 0);
        assert_eq!(canvas.count_in(&right_edge, NORMAL.background), 0);
        assert!(canvas.count_in(&bounds, NORMAL.background) > 0);
    }
}
