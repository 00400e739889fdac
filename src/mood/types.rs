//! Type definitions for the mood store.
//!
//! Everything here serializes to the same JSON shapes the views consume:
//! moods as lowercase labels, timestamps as RFC 3339 strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context attached to every history entry produced by a detection pass.
pub const LIVE_DETECTION_CONTEXT: &str = "Live detection";

/// A mood label. Used both as the user's emotional state and as a style key.
///
/// Parsing never fails: unrecognized labels are kept verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Confident,
    Calm,
    Excited,
    Elegant,
    Romantic,
    Custom(String),
}

impl Mood {
    /// All moods with a dedicated entry in the style table.
    pub const KNOWN: [Mood; 6] = [
        Mood::Happy,
        Mood::Confident,
        Mood::Calm,
        Mood::Excited,
        Mood::Elegant,
        Mood::Romantic,
    ];

    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "confident" => Mood::Confident,
            "calm" => Mood::Calm,
            "excited" => Mood::Excited,
            "elegant" => Mood::Elegant,
            "romantic" => Mood::Romantic,
            _ => Mood::Custom(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Mood::Happy => "happy",
            Mood::Confident => "confident",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Elegant => "elegant",
            Mood::Romantic => "romantic",
            Mood::Custom(label) => label,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Mood::Custom(_))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mood::parse(s))
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        Mood::parse(label)
    }
}

impl From<String> for Mood {
    fn from(label: String) -> Self {
        Mood::parse(&label)
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.label().to_string()
    }
}

/// One historical mood observation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Aggregate display row for the mood leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodLeaderboardRow {
    pub mood: Mood,
    pub total_orders: u32,
    pub total_spent: f64,
    /// Signed percentage, e.g. "+23%" or "-4%".
    pub growth: String,
    pub emoji: String,
}

/// What to do with a confidence value outside `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidencePolicy {
    /// Store the value as given.
    #[default]
    PassThrough,
    /// Clamp into `[0, 1]`; NaN becomes 0.
    Clamp,
    /// Refuse the write.
    Reject,
}

/// Immutable copy of the store state, published to subscribers on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSnapshot {
    pub current_mood: Option<Mood>,
    pub detected_mood: Option<Mood>,
    pub mood_history: Vec<MoodEntry>,
    pub mood_leaderboard: Vec<MoodLeaderboardRow>,
    /// Incremented once per published mutation.
    pub revision: u64,
}
