//! Monochrome palette.
//!
//! The display has two colours. Rows are filled with the foreground colour
//! and digits are cut out of them in the background colour, so the digits
//! read as "holes" in a solid strip. `BinaryColor::On` is the lit (white)
//! pixel. Inverting swaps the two.

use embedded_graphics::pixelcolor::BinaryColor;

/// Foreground/background pair for one colour scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Row fill colour.
    pub foreground: BinaryColor,
    /// Window background and digit text colour.
    pub background: BinaryColor,
}

/// Dark strips on a white screen.
pub const NORMAL: Palette = Palette {
    foreground: BinaryColor::Off,
    background: BinaryColor::On,
};

/// White strips on a dark screen.
pub const INVERTED: Palette = Palette {
    foreground: BinaryColor::On,
    background: BinaryColor::Off,
};

impl Palette {
    /// Palette for the `invert_colors` option.
    #[inline]
    pub const fn for_inverted(invert: bool) -> Self { if invert { INVERTED } else { NORMAL } }
}
