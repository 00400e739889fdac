//! Per-frame pose of an avatar.
//!
//! Pure functions of elapsed time, selection and hover state. Nothing is
//! stored between frames, so any renderer can call these at its own rate.

use glam::{Quat, Vec3};

use crate::scene::Transform;

/// Vertical idle float, in scene units.
pub const FLOAT_AMPLITUDE: f32 = 0.1;
/// Idle float angular speed, radians per second.
pub const FLOAT_SPEED: f32 = 2.0;
/// Yaw swing while selected, in radians.
pub const SELECTED_YAW_AMPLITUDE: f32 = 0.3;
pub const SELECTED_YAW_SPEED: f32 = 0.5;
/// Uniform scale factor while the pointer is over the figure.
pub const HOVER_SCALE: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl Pose {
    pub fn to_transform(self) -> Transform {
        Transform::from_translation(self.translation)
            .with_rotation(Quat::from_rotation_y(self.yaw))
            .with_scale(Vec3::splat(self.scale))
    }
}

pub fn idle_offset(elapsed: f32) -> f32 {
    (elapsed * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE
}

pub fn selection_yaw(elapsed: f32, is_selected: bool) -> f32 {
    if is_selected {
        (elapsed * SELECTED_YAW_SPEED).sin() * SELECTED_YAW_AMPLITUDE
    } else {
        0.0
    }
}

pub fn hover_scale(hovered: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else {
        1.0
    }
}

/// Pose of a figure anchored at `position` after `elapsed` seconds.
pub fn pose_at(position: Vec3, is_selected: bool, hovered: bool, elapsed: f32) -> Pose {
    Pose {
        translation: position + Vec3::Y * idle_offset(elapsed),
        yaw: selection_yaw(elapsed, is_selected),
        scale: hover_scale(hovered),
    }
}
