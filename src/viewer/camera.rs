use std::f32::consts::{FRAC_PI_3, TAU};

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::config::ViewerConfig;

/// Orbit camera circling a target point.
///
/// `polar` is measured from the +Y axis, `azimuth` around it starting at +Z.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitCamera {
    distance: f32,
    polar: f32,
    azimuth: f32,
    auto_rotate: bool,
    #[serde(skip)]
    limits: ViewerConfig,
}

impl OrbitCamera {
    pub const DEFAULT_POLAR: f32 = FRAC_PI_3;
    pub const DEFAULT_AZIMUTH: f32 = 0.0;

    pub fn new(limits: &ViewerConfig) -> Self {
        Self {
            distance: limits.default_distance,
            polar: Self::DEFAULT_POLAR,
            azimuth: Self::DEFAULT_AZIMUTH,
            auto_rotate: true,
            limits: limits.clone(),
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Back to the default distance and angle, auto-rotate on.
    pub fn reset(&mut self) {
        self.distance = self.limits.default_distance;
        self.polar = Self::DEFAULT_POLAR;
        self.azimuth = Self::DEFAULT_AZIMUTH;
        self.auto_rotate = true;
    }

    /// Move one step closer, never nearer than the minimum distance.
    pub fn zoom_in(&mut self) -> f32 {
        self.distance = (self.distance - self.limits.zoom_step).max(self.limits.min_distance);
        self.distance
    }

    /// Move one step away, never farther than the maximum distance.
    pub fn zoom_out(&mut self) -> f32 {
        self.distance = (self.distance + self.limits.zoom_step).min(self.limits.max_distance);
        self.distance
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Advance auto-rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate {
            self.azimuth = (self.azimuth + self.limits.auto_rotate_speed * dt).rem_euclid(TAU);
        }
    }

    /// Eye position for the given orbit target.
    pub fn position(&self, target: Vec3) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position(target), target, Vec3::Y)
    }
}
