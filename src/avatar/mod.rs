//! Avatar scene composer.
//!
//! Turns a gender variant and an outfit into a humanoid built from
//! primitives, coloured through the style table. Animation is computed per
//! frame from elapsed time in [`pose`]; the composer itself is stateless.

mod composer;
mod interaction;
pub mod pose;
mod types;

pub use composer::{
    compose, compose_posed, KNOWN_ACCESSORIES, LABEL_IDLE_COLOR, LABEL_SELECTED_COLOR,
    SELECTION_RING_COLOR,
};
pub use interaction::{Avatar, OnSelect};
pub use types::{AvatarOutfit, AvatarProps, Gender};
