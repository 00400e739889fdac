use serde::Serialize;

use crate::style::Color;

/// Light sources. Directional and point lights take their position and
/// direction from the owning node's transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    Directional { color: Color, intensity: f32 },
    Point { color: Color, intensity: f32 },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Point { intensity, .. } => *intensity,
        }
    }
}
