use serde::Serialize;

use crate::style::Color;

/// Presentation colours for the overlay. Only the dark-mode flag picks between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewerTheme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub ground: Color,
}

impl ViewerTheme {
    pub const LIGHT: ViewerTheme = ViewerTheme {
        background: Color::from_u32(0xF5F0EB),
        panel: Color::WHITE,
        text: Color::from_u32(0x1F1F1F),
        ground: Color::from_u32(0xE0D8D0),
    };

    pub const DARK: ViewerTheme = ViewerTheme {
        background: Color::from_u32(0x121212),
        panel: Color::from_u32(0x1E1E1E),
        text: Color::from_u32(0xF0F0F0),
        ground: Color::from_u32(0x2A2A2A),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}
