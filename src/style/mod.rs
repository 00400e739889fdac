//! Colours and the style table.

mod color;
mod palette;

pub use color::Color;
pub use palette::{region_color, style_color, Region, FALLBACK_GRAY};
