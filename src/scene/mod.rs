//! Retained-mode scene graph.
//!
//! A tree of owned [`SceneNode`]s, each with a local [`Transform`] and an
//! optional mesh, text label or light. Nothing here knows how to draw;
//! a renderer walks the tree with [`SceneNode::walk`] and gets world
//! matrices in parent-before-child order.

mod light;
mod mesh;
mod node;
mod transform;

pub use light::Light;
pub use mesh::{Material, Mesh};
pub use node::{NodeKind, SceneNode};
pub use transform::Transform;
