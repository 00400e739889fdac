//! Outfit viewer overlay.
//!
//! A modal layered over whichever page opened it. It maps the selected
//! outfit's primary mood onto the avatar, and owns an orbit camera and a
//! details panel. It is not a route and keeps nothing after it closes.

mod camera;
mod overlay;
mod theme;

pub use camera::OrbitCamera;
pub use overlay::{DetailsPanel, OnClose, OutfitViewer, ORBIT_TARGET};
pub use theme::ViewerTheme;
