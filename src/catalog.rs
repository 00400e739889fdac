//! Stylist top picks.
//!
//! Static display data embedded in the binary. Nothing here is persisted
//! or written back.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::MoodStyleError;
use crate::mood::Mood;

const TOP_PICKS: &str = include_str!("../data/top_picks.json");

/// Parsed once on first use.
///
/// # Panics
/// First access panics if the embedded JSON is invalid (a build-time bug).
static CATALOG: LazyLock<Vec<OutfitDescriptor>> = LazyLock::new(|| {
    serde_json::from_str(TOP_PICKS).expect("embedded top_picks.json must be valid JSON")
});

/// Display metadata for a curated outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Mood tags, primary first. Never empty for catalog entries.
    pub mood: Vec<Mood>,
    pub items: Vec<String>,
    #[serde(default)]
    pub stylist: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub likes: u32,
}

impl OutfitDescriptor {
    pub fn primary_mood(&self) -> Option<&Mood> {
        self.mood.first()
    }

    pub fn has_mood(&self, mood: &Mood) -> bool {
        self.mood.contains(mood)
    }
}

/// All top picks, in display order.
pub fn top_picks() -> Vec<OutfitDescriptor> {
    CATALOG.clone()
}

pub fn find(id: &str) -> Result<OutfitDescriptor, MoodStyleError> {
    CATALOG
        .iter()
        .find(|o| o.id == id)
        .cloned()
        .ok_or_else(|| MoodStyleError::UnknownOutfit(id.to_string()))
}

/// Picks tagged with the given mood, primary-mood matches first.
pub fn by_mood(mood: &Mood) -> Vec<OutfitDescriptor> {
    let mut picks: Vec<_> = CATALOG
        .iter()
        .filter(|o| o.has_mood(mood))
        .cloned()
        .collect();
    picks.sort_by_key(|o| o.primary_mood() != Some(mood));
    picks
}
