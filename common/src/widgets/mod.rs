//! Widget components for the watchface display.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>` for platform independence.

mod strip;

pub use strip::{PlacedDigit, draw_background, draw_row, layout_digit, layout_row};
