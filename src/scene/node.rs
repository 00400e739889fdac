use glam::Mat4;
use serde::Serialize;

use super::light::Light;
use super::mesh::{Material, Mesh};
use super::transform::Transform;
use crate::style::Color;

/// What a node draws, if anything.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Group,
    Mesh { mesh: Mesh, material: Material },
    /// Billboard text, centred on the node origin.
    Text { text: String, color: Color, font_size: f32 },
    Light { light: Light },
}

/// A node in the retained scene tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
    pub visible: bool,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            kind,
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    pub fn mesh(name: impl Into<String>, mesh: Mesh, material: Material) -> Self {
        Self::new(name, NodeKind::Mesh { mesh, material })
    }

    pub fn text(name: impl Into<String>, text: impl Into<String>, color: Color, font_size: f32) -> Self {
        Self::new(
            name,
            NodeKind::Text {
                text: text.into(),
                color,
                font_size,
            },
        )
    }

    pub fn light(name: impl Into<String>, light: Light) -> Self {
        Self::new(name, NodeKind::Light { light })
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.translation = glam::Vec3::new(x, y, z);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Material of a mesh node.
    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            _ => None,
        }
    }

    /// Depth-first search by name, this node included.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Visit every visible node with its world matrix, parents before children.
    /// Hidden nodes prune their whole subtree.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&SceneNode, Mat4),
    {
        self.walk_inner(Mat4::IDENTITY, &mut visit);
    }

    fn walk_inner<F>(&self, parent: Mat4, visit: &mut F)
    where
        F: FnMut(&SceneNode, Mat4),
    {
        if !self.visible {
            return;
        }
        let world = parent * self.transform.to_matrix();
        visit(self, world);
        for child in &self.children {
            child.walk_inner(world, visit);
        }
    }

    /// World matrix of the first node with the given name, if it is visible.
    pub fn world_matrix(&self, name: &str) -> Option<Mat4> {
        let mut found = None;
        self.walk(|node, world| {
            if found.is_none() && node.name == name {
                found = Some(world);
            }
        });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn sample_tree() -> SceneNode {
        SceneNode::group("root").at(0.0, 1.0, 0.0).with_child(
            SceneNode::group("arm").at(1.0, 0.0, 0.0).with_child(
                SceneNode::mesh(
                    "hand",
                    Mesh::Sphere { radius: 0.1 },
                    Material::standard(Color::WHITE),
                )
                .at(0.0, -0.5, 0.0),
            ),
        )
    }

    #[test]
    fn test_find_by_name() {
        let tree = sample_tree();
        assert!(tree.find("hand").is_some());
        assert!(tree.find("foot").is_none());
        assert_eq!(tree.find("root").unwrap().children.len(), 1);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_world_matrix_composes_parents() {
        let tree = sample_tree();
        let world = tree.world_matrix("hand").unwrap();
        let origin = world.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(1.0, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let mut tree = sample_tree();
        tree.find_mut("arm").unwrap().visible = false;

        let mut names = Vec::new();
        tree.walk(|node, _| names.push(node.name.clone()));
        assert_eq!(names, vec!["root"]);
        assert!(tree.world_matrix("hand").is_none());
    }

    #[test]
    fn test_material_only_on_meshes() {
        let tree = sample_tree();
        assert!(tree.material().is_none());
        assert_eq!(tree.find("hand").unwrap().material().unwrap().color, Color::WHITE);
    }
}
