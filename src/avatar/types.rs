use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::mood::Mood;
use crate::style::{region_color, Color, Region};

/// The two humanoid variants the composer can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn skin_color(self) -> Color {
        match self {
            Gender::Female => Color::from_u32(0xFDBCB4),
            Gender::Male => Color::from_u32(0xE0AC69),
        }
    }

    pub fn hair_color(self) -> Color {
        match self {
            Gender::Female => Color::from_u32(0x8B4513),
            Gender::Male => Color::from_u32(0x2C1B0E),
        }
    }

    /// Text shown under the figure.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Gender::Female => Gender::Male,
            Gender::Male => Gender::Female,
        }
    }
}

/// Style labels per body region plus worn accessories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarOutfit {
    pub top: Option<Mood>,
    pub bottom: Option<Mood>,
    pub shoes: Option<Mood>,
    #[serde(default)]
    pub accessories: Vec<String>,
}

impl AvatarOutfit {
    /// Same style on every region, no accessories.
    pub fn uniform(style: Mood) -> Self {
        Self {
            top: Some(style.clone()),
            bottom: Some(style.clone()),
            shoes: Some(style),
            accessories: Vec::new(),
        }
    }

    pub fn style(&self, region: Region) -> Option<&Mood> {
        match region {
            Region::Top => self.top.as_ref(),
            Region::Bottom => self.bottom.as_ref(),
            Region::Shoes => self.shoes.as_ref(),
        }
    }
}

/// Everything the composer needs to build one figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarProps {
    pub gender: Gender,
    pub outfit: Option<AvatarOutfit>,
    pub position: Vec3,
    pub is_selected: bool,
}

impl AvatarProps {
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            outfit: None,
            position: Vec3::ZERO,
            is_selected: false,
        }
    }

    pub fn with_outfit(mut self, outfit: AvatarOutfit) -> Self {
        self.outfit = Some(outfit);
        self
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    /// Resolved colour of a body region.
    pub fn region_color(&self, region: Region) -> Color {
        region_color(region, self.outfit.as_ref().and_then(|o| o.style(region)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{style_color, FALLBACK_GRAY};

    #[test]
    fn test_gender_defaults_are_distinct() {
        assert_ne!(Gender::Female.skin_color(), Gender::Male.skin_color());
        assert_ne!(Gender::Female.hair_color(), Gender::Male.hair_color());
        assert_eq!(Gender::Female.toggled(), Gender::Male);
        assert_eq!(Gender::Male.toggled().toggled(), Gender::Male);
    }

    #[test]
    fn test_region_color_without_outfit() {
        let props = AvatarProps::new(Gender::Male);
        for region in Region::ALL {
            assert_eq!(props.region_color(region), region.default_color());
        }
    }

    #[test]
    fn test_region_color_partial_outfit() {
        let props = AvatarProps::new(Gender::Female).with_outfit(AvatarOutfit {
            top: Some(Mood::Happy),
            bottom: Some(Mood::parse("sparkly")),
            shoes: None,
            accessories: vec![],
        });
        assert_eq!(props.region_color(Region::Top), style_color(&Mood::Happy));
        assert_eq!(props.region_color(Region::Bottom), FALLBACK_GRAY);
        assert_eq!(props.region_color(Region::Shoes), Region::Shoes.default_color());
    }

    #[test]
    fn test_outfit_deserialize_without_accessories() {
        let outfit: AvatarOutfit =
            serde_json::from_str(r#"{"top":"calm","bottom":null,"shoes":"elegant"}"#).unwrap();
        assert_eq!(outfit.top, Some(Mood::Calm));
        assert!(outfit.bottom.is_none());
        assert!(outfit.accessories.is_empty());
    }
}
