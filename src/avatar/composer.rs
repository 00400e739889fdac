//! Builds the humanoid figure out of primitive meshes.
//!
//! Layout is y-up with the feet on y = 0. The figure is about 2.1 units tall.

use glam::{Quat, Vec3};
use tracing::debug;

use super::pose::pose_at;
use super::types::{AvatarProps, Gender};
use crate::scene::{Material, Mesh, SceneNode, Transform};
use crate::style::{Color, Region};

pub const SELECTION_RING_COLOR: Color = Color::from_u32(0xFFD700);
pub const SELECTION_RING_OPACITY: f32 = 0.5;
pub const LABEL_SELECTED_COLOR: Color = Color::from_u32(0xFFD700);
pub const LABEL_IDLE_COLOR: Color = Color::WHITE;

/// Accessories the composer knows how to draw.
pub const KNOWN_ACCESSORIES: [&str; 5] = ["hat", "glasses", "necklace", "bag", "scarf"];

/// Build the figure at rest: anchored at `props.position`, no float, no
/// yaw, unit scale.
pub fn compose(props: &AvatarProps) -> SceneNode {
    let root = SceneNode::group("avatar")
        .with_transform(Transform::from_translation(props.position))
        .with_child(figure(props));

    let root = if props.is_selected {
        root.with_child(selection_ring())
    } else {
        root
    };

    root.with_child(label(props))
}

/// Build the figure posed for the given frame.
pub fn compose_posed(props: &AvatarProps, hovered: bool, elapsed: f32) -> SceneNode {
    let mut root = compose(props);
    root.transform = pose_at(props.position, props.is_selected, hovered, elapsed).to_transform();
    root
}

fn figure(props: &AvatarProps) -> SceneNode {
    let skin = Material::standard(props.gender.skin_color()).with_roughness(0.6);
    let top = Material::standard(props.region_color(Region::Top));
    let bottom = Material::standard(props.region_color(Region::Bottom));
    let shoes = Material::standard(props.region_color(Region::Shoes)).with_roughness(0.4);

    let (shoulder_top, waist) = match props.gender {
        Gender::Female => (0.2, 0.17),
        Gender::Male => (0.24, 0.2),
    };

    let mut body = SceneNode::group("figure")
        .with_child(
            SceneNode::mesh("head", Mesh::Sphere { radius: 0.18 }, skin).at(0.0, 1.85, 0.0),
        )
        .with_child(hair(props.gender))
        .with_child(
            SceneNode::mesh(
                "neck",
                Mesh::Cylinder {
                    radius_top: 0.05,
                    radius_bottom: 0.06,
                    height: 0.1,
                },
                skin,
            )
            .at(0.0, 1.63, 0.0),
        )
        .with_child(
            SceneNode::mesh(
                "torso",
                Mesh::Cylinder {
                    radius_top: shoulder_top,
                    radius_bottom: waist,
                    height: 0.7,
                },
                top,
            )
            .at(0.0, 1.23, 0.0),
        );

    for (side, x) in [("left", -1.0_f32), ("right", 1.0)] {
        body.push(
            SceneNode::mesh(
                format!("{}_arm", side),
                Mesh::Capsule {
                    radius: 0.05,
                    length: 0.55,
                },
                skin,
            )
            .with_transform(
                Transform::from_xyz(x * (shoulder_top + 0.07), 1.25, 0.0)
                    .with_rotation(Quat::from_rotation_z(x * 0.1)),
            ),
        );
        body.push(
            SceneNode::mesh(
                format!("{}_leg", side),
                Mesh::Cylinder {
                    radius_top: 0.08,
                    radius_bottom: 0.06,
                    height: 0.8,
                },
                bottom,
            )
            .at(x * 0.1, 0.48, 0.0),
        );
        body.push(
            SceneNode::mesh(
                format!("{}_shoe", side),
                Mesh::Cuboid {
                    size: Vec3::new(0.12, 0.08, 0.22),
                },
                shoes,
            )
            .at(x * 0.1, 0.04, 0.03),
        );
    }

    if let Some(outfit) = &props.outfit {
        for name in &outfit.accessories {
            match accessory(name) {
                Some(node) => body.push(node),
                None => debug!("Skipping unknown accessory '{}'", name),
            }
        }
    }

    body
}

fn hair(gender: Gender) -> SceneNode {
    let material = Material::standard(gender.hair_color()).with_roughness(0.9);
    let cap = SceneNode::mesh("hair", Mesh::Sphere { radius: 0.19 }, material).with_transform(
        Transform::from_xyz(0.0, 1.9, -0.02).with_scale(Vec3::new(1.0, 0.75, 1.0)),
    );

    match gender {
        Gender::Female => cap.with_child(
            SceneNode::mesh(
                "hair_long",
                Mesh::Capsule {
                    radius: 0.14,
                    length: 0.3,
                },
                material,
            )
            .at(0.0, -0.3, -0.1),
        ),
        Gender::Male => cap,
    }
}

fn accessory(name: &str) -> Option<SceneNode> {
    let node = match name.trim().to_ascii_lowercase().as_str() {
        "hat" => SceneNode::mesh(
            "accessory_hat",
            Mesh::Cylinder {
                radius_top: 0.15,
                radius_bottom: 0.2,
                height: 0.12,
            },
            Material::standard(Color::from_u32(0x3B2F2F)),
        )
        .at(0.0, 2.05, 0.0),
        "glasses" => SceneNode::mesh(
            "accessory_glasses",
            Mesh::Cuboid {
                size: Vec3::new(0.3, 0.05, 0.02),
            },
            Material::standard(Color::BLACK).with_metalness(0.6),
        )
        .at(0.0, 1.88, 0.17),
        "necklace" => SceneNode::mesh(
            "accessory_necklace",
            Mesh::Torus {
                radius: 0.09,
                tube: 0.01,
            },
            Material::standard(Color::from_u32(0xD4AF37))
                .with_metalness(0.9)
                .with_roughness(0.2),
        )
        .at(0.0, 1.58, 0.02),
        "bag" => SceneNode::mesh(
            "accessory_bag",
            Mesh::Cuboid {
                size: Vec3::new(0.2, 0.15, 0.06),
            },
            Material::standard(Color::from_u32(0x6B3E26)),
        )
        .at(0.3, 0.95, 0.0),
        "scarf" => SceneNode::mesh(
            "accessory_scarf",
            Mesh::Torus {
                radius: 0.08,
                tube: 0.035,
            },
            Material::standard(Color::from_u32(0xB22222)),
        )
        .at(0.0, 1.64, 0.0),
        _ => return None,
    };
    Some(node)
}

fn selection_ring() -> SceneNode {
    SceneNode::mesh(
        "selection_ring",
        Mesh::Ring {
            inner_radius: 0.5,
            outer_radius: 0.6,
        },
        Material::standard(SELECTION_RING_COLOR).with_opacity(SELECTION_RING_OPACITY),
    )
    .at(0.0, 0.01, 0.0)
}

fn label(props: &AvatarProps) -> SceneNode {
    let color = if props.is_selected {
        LABEL_SELECTED_COLOR
    } else {
        LABEL_IDLE_COLOR
    };
    SceneNode::text("label", props.gender.label(), color, 0.15).at(0.0, -0.3, 0.0)
}
