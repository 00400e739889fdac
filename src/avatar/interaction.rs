use tracing::debug;

use super::composer::compose_posed;
use super::types::{AvatarProps, Gender};
use crate::scene::SceneNode;

/// Click handler supplied by whoever places the avatar.
pub type OnSelect = Box<dyn FnMut(Gender) + Send>;

/// A placed avatar that reacts to pointer input.
///
/// Hover is the only interaction state it keeps; selection belongs to the
/// caller and arrives through `props`.
pub struct Avatar {
    props: AvatarProps,
    hovered: bool,
    on_select: OnSelect,
}

impl Avatar {
    pub fn new(props: AvatarProps, on_select: OnSelect) -> Self {
        Self {
            props,
            hovered: false,
            on_select,
        }
    }

    pub fn props(&self) -> &AvatarProps {
        &self.props
    }

    pub fn set_props(&mut self, props: AvatarProps) {
        self.props = props;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pointer_over(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_out(&mut self) {
        self.hovered = false;
    }

    /// Forward a click to the caller's handler. Nothing else changes.
    pub fn click(&mut self) {
        debug!("Avatar clicked: {}", self.props.gender.label());
        (self.on_select)(self.props.gender);
    }

    /// Scene for the frame at `elapsed` seconds.
    pub fn frame(&self, elapsed: f32) -> SceneNode {
        compose_posed(&self.props, self.hovered, elapsed)
    }
}
