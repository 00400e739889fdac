use glam::Vec3;
use serde::Serialize;
use tracing::{debug, info};

use super::camera::OrbitCamera;
use super::theme::ViewerTheme;
use crate::avatar::{compose_posed, AvatarOutfit, AvatarProps, Gender};
use crate::catalog::OutfitDescriptor;
use crate::config::ViewerConfig;
use crate::mood::Mood;
use crate::scene::{Light, Material, Mesh, SceneNode};
use crate::style::{style_color, Color};

/// Called once when the overlay is closed.
pub type OnClose = Box<dyn FnOnce() + Send>;

/// Point the camera orbits: roughly the avatar's chest.
pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Text shown next to the 3D view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsPanel {
    pub name: String,
    pub category: String,
    pub moods: Vec<Mood>,
    pub items: Vec<String>,
    /// Colour of the primary mood, shown as a swatch.
    pub swatch: Color,
}

/// Modal 3D preview of one outfit.
///
/// Holds no state that outlives it: closing consumes the viewer, so the next
/// one starts from the default camera.
pub struct OutfitViewer {
    outfit: Option<OutfitDescriptor>,
    gender: Gender,
    camera: OrbitCamera,
    dark_mode: bool,
    on_close: OnClose,
}

impl OutfitViewer {
    pub fn open(
        outfit: Option<OutfitDescriptor>,
        dark_mode: bool,
        config: &ViewerConfig,
        on_close: OnClose,
    ) -> Self {
        match &outfit {
            Some(o) => info!("Opening 3D viewer for outfit {}", o.id),
            None => info!("Opening 3D viewer without an outfit"),
        }
        Self {
            outfit,
            gender: Gender::Female,
            camera: OrbitCamera::new(config),
            dark_mode,
            on_close,
        }
    }

    pub fn outfit(&self) -> Option<&OutfitDescriptor> {
        self.outfit.as_ref()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Avatar outfit derived from the descriptor: the primary mood styles
    /// every region.
    pub fn avatar_outfit(&self) -> Option<AvatarOutfit> {
        self.outfit
            .as_ref()
            .and_then(OutfitDescriptor::primary_mood)
            .map(|mood| AvatarOutfit::uniform(mood.clone()))
    }

    pub fn avatar_props(&self) -> AvatarProps {
        AvatarProps {
            gender: self.gender,
            outfit: self.avatar_outfit(),
            position: Vec3::ZERO,
            is_selected: false,
        }
    }

    /// Switch the displayed figure. The outfit is unchanged.
    pub fn toggle_gender(&mut self) -> Gender {
        self.gender = self.gender.toggled();
        debug!("Viewer showing {} figure", self.gender.label());
        self.gender
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.camera.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.camera.zoom_out()
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.camera.toggle_auto_rotate()
    }

    /// Advance time-driven camera motion by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.camera.advance(dt);
    }

    pub fn theme(&self) -> ViewerTheme {
        ViewerTheme::for_mode(self.dark_mode)
    }

    pub fn details(&self) -> Option<DetailsPanel> {
        let outfit = self.outfit.as_ref()?;
        let swatch = outfit
            .primary_mood()
            .map_or(crate::style::FALLBACK_GRAY, style_color);
        Some(DetailsPanel {
            name: outfit.name.clone(),
            category: outfit.category.clone(),
            moods: outfit.mood.clone(),
            items: outfit.items.clone(),
            swatch,
        })
    }

    /// Full scene for the frame at `elapsed` seconds: lights, ground and the
    /// posed avatar.
    pub fn scene(&self, elapsed: f32) -> SceneNode {
        let theme = self.theme();
        SceneNode::group("viewer")
            .with_child(SceneNode::light(
                "ambient",
                Light::Ambient {
                    color: Color::WHITE,
                    intensity: 0.5,
                },
            ))
            .with_child(
                SceneNode::light(
                    "key_light",
                    Light::Directional {
                        color: Color::WHITE,
                        intensity: 1.0,
                    },
                )
                .at(5.0, 5.0, 5.0),
            )
            .with_child(
                SceneNode::light(
                    "fill_light",
                    Light::Point {
                        color: Color::WHITE,
                        intensity: 0.5,
                    },
                )
                .at(-5.0, 5.0, -5.0),
            )
            .with_child(SceneNode::mesh(
                "ground",
                Mesh::Plane {
                    width: 10.0,
                    depth: 10.0,
                },
                Material::standard(theme.ground).with_roughness(1.0),
            ))
            .with_child(compose_posed(&self.avatar_props(), false, elapsed))
    }

    /// Eye position of the camera this frame.
    pub fn eye(&self) -> Vec3 {
        self.camera.position(ORBIT_TARGET)
    }

    pub fn close(self) {
        info!("Closing 3D viewer");
        (self.on_close)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::style::{Region, FALLBACK_GRAY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn viewer(outfit: Option<OutfitDescriptor>) -> OutfitViewer {
        OutfitViewer::open(outfit, false, &ViewerConfig::default(), Box::new(|| {}))
    }

    fn descriptor(moods: &[&str]) -> OutfitDescriptor {
        OutfitDescriptor {
            id: "test".into(),
            name: "Test Look".into(),
            category: "Test".into(),
            mood: moods.iter().map(|m| Mood::parse(m)).collect(),
            items: vec!["Shirt".into()],
            stylist: None,
            price: None,
            rating: None,
            likes: 0,
        }
    }

    #[test]
    fn test_primary_mood_styles_every_region() {
        let v = viewer(Some(descriptor(&["elegant", "confident"])));
        let props = v.avatar_props();
        for region in Region::ALL {
            assert_eq!(props.region_color(region), style_color(&Mood::Elegant));
        }
        assert!(v.avatar_outfit().unwrap().accessories.is_empty());
    }

    #[test]
    fn test_custom_primary_mood_is_gray() {
        let v = viewer(Some(descriptor(&["mysterious", "calm"])));
        assert_eq!(v.avatar_props().region_color(Region::Top), FALLBACK_GRAY);
    }

    #[test]
    fn test_no_outfit() {
        let v = viewer(None);
        assert!(v.avatar_outfit().is_none());
        assert!(v.details().is_none());
        assert_eq!(
            v.avatar_props().region_color(Region::Bottom),
            Region::Bottom.default_color()
        );
    }

    #[test]
    fn test_toggle_gender_keeps_outfit() {
        let mut v = viewer(Some(descriptor(&["calm"])));
        let before = v.avatar_outfit();
        assert_eq!(v.gender(), Gender::Female);
        assert_eq!(v.toggle_gender(), Gender::Male);
        assert_eq!(v.avatar_outfit(), before);
        assert_eq!(v.avatar_props().gender, Gender::Male);
    }

    #[test]
    fn test_camera_controls() {
        let mut v = viewer(None);
        assert_eq!(v.zoom_in(), 4.0);
        assert!(!v.toggle_auto_rotate());
        v.tick(1.0);
        assert_eq!(v.camera().azimuth(), 0.0);
        v.reset_camera();
        assert_eq!(v.camera().distance(), 5.0);
        assert!(v.camera().auto_rotate());
    }

    #[test]
    fn test_details_panel() {
        let gala = catalog::find("tp-001").unwrap();
        let v = viewer(Some(gala.clone()));
        let details = v.details().unwrap();
        assert_eq!(details.name, gala.name);
        assert_eq!(details.items, gala.items);
        assert_eq!(details.swatch, style_color(&Mood::Elegant));
    }

    #[test]
    fn test_scene_contains_lights_ground_and_avatar() {
        let v = viewer(Some(descriptor(&["happy"])));
        let scene = v.scene(0.0);
        for name in ["ambient", "key_light", "fill_light", "ground", "avatar", "torso"] {
            assert!(scene.find(name).is_some(), "missing {}", name);
        }
        let torso = scene.find("torso").unwrap();
        assert_eq!(torso.material().unwrap().color, style_color(&Mood::Happy));
    }

    #[test]
    fn test_theme_follows_dark_mode() {
        let dark = OutfitViewer::open(None, true, &ViewerConfig::default(), Box::new(|| {}));
        assert_eq!(dark.theme(), ViewerTheme::DARK);
        assert_eq!(viewer(None).theme(), ViewerTheme::LIGHT);
    }

    #[test]
    fn test_close_invokes_callback_and_reopen_resets_camera() {
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = closed.clone();
        let mut v = OutfitViewer::open(
            None,
            false,
            &ViewerConfig::default(),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        v.zoom_out();
        v.toggle_auto_rotate();
        v.close();
        assert_eq!(closed.load(Ordering::SeqCst), 1);

        let reopened = viewer(None);
        assert_eq!(reopened.camera().distance(), 5.0);
        assert!(reopened.camera().auto_rotate());
    }
}
