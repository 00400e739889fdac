//! The style table and the colour fallbacks around it.
//!
//! Shared by the avatar composer and the outfit viewer so both resolve a
//! style label to the same colour.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::mood::Mood;

/// Colour for any style label that is not in the table.
pub const FALLBACK_GRAY: Color = Color::from_u32(0x808080);

/// A dressable body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Top,
    Bottom,
    Shoes,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Top, Region::Bottom, Region::Shoes];

    /// Colour used when the outfit says nothing about this region.
    pub const fn default_color(self) -> Color {
        match self {
            Region::Top => Color::from_u32(0x4A90E2),
            Region::Bottom => Color::from_u32(0x2C3E50),
            Region::Shoes => Color::from_u32(0x1A1A1A),
        }
    }
}

/// Look up a style label in the six-entry style table.
pub fn style_color(style: &Mood) -> Color {
    match style {
        Mood::Happy => Color::from_u32(0xFFD700),
        Mood::Confident => Color::from_u32(0xDC143C),
        Mood::Calm => Color::from_u32(0x87CEEB),
        Mood::Excited => Color::from_u32(0xFF6347),
        Mood::Elegant => Color::from_u32(0x2E1A47),
        Mood::Romantic => Color::from_u32(0xFFB6C1),
        Mood::Custom(_) => FALLBACK_GRAY,
    }
}

/// Resolve the colour of one region: the styled colour when a label is
/// present, the region default otherwise.
pub fn region_color(region: Region, style: Option<&Mood>) -> Color {
    style.map_or(region.default_color(), style_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_six_distinct_colors() {
        let colors: HashSet<Color> = Mood::KNOWN.iter().map(style_color).collect();
        assert_eq!(colors.len(), 6);
        assert!(!colors.contains(&FALLBACK_GRAY));
    }

    #[test]
    fn test_unknown_label_falls_back_to_gray() {
        for label in ["grumpy", "", "ELEGANT!", "neon"] {
            assert_eq!(style_color(&Mood::parse(label)), FALLBACK_GRAY, "label {:?}", label);
        }
    }

    #[test]
    fn test_absent_region_uses_region_default() {
        for region in Region::ALL {
            let color = region_color(region, None);
            assert_eq!(color, region.default_color());
            assert_ne!(color, FALLBACK_GRAY);
        }
    }

    #[test]
    fn test_present_region_uses_table() {
        assert_eq!(
            region_color(Region::Top, Some(&Mood::Elegant)),
            style_color(&Mood::Elegant)
        );
        assert_eq!(
            region_color(Region::Shoes, Some(&Mood::Custom("x".into()))),
            FALLBACK_GRAY
        );
    }
}
