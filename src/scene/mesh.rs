use glam::Vec3;
use serde::Serialize;

use crate::style::Color;

/// Primitive geometry. Dimensions are in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mesh {
    Sphere { radius: f32 },
    Cuboid { size: Vec3 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Capsule { radius: f32, length: f32 },
    /// Flat annulus lying in the XZ plane.
    Ring { inner_radius: f32, outer_radius: f32 },
    Torus { radius: f32, tube: f32 },
    /// Flat rectangle lying in the XZ plane.
    Plane { width: f32, depth: f32 },
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            roughness: 0.7,
            metalness: 0.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_is_clamped() {
        let m = Material::standard(Color::WHITE).with_opacity(1.5);
        assert_eq!(m.opacity, 1.0);
        assert!(!m.is_transparent());
        assert!(Material::standard(Color::WHITE).with_opacity(0.3).is_transparent());
    }

    #[test]
    fn test_mesh_serializes_tagged() {
        let json = serde_json::to_value(Mesh::Sphere { radius: 0.25 }).unwrap();
        assert_eq!(json["type"], "sphere");
        assert_eq!(json["radius"], 0.25);
    }
}
