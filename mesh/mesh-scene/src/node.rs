//! Scene graph nodes.
//!
//! A [`SceneNode`] is the host-side view of a loaded model: a tree of
//! named nodes, each with a local [`NodeTransform`], optional mesh data and
//! optional material binding. Avatars and garments are each one root node.

use mesh_types::{Bounds3, IndexedMesh, Matrix4};

use crate::material::MaterialSlot;
use crate::transform::NodeTransform;

/// A node in the scene graph.
///
/// # Example
///
/// ```
/// use mesh_scene::{Material, MaterialSlot, NodeTransform, SceneNode};
/// use mesh_types::{box_mesh, Point3};
/// use nalgebra::Vector3;
///
/// let shirt = SceneNode::new("shirt")
///     .with_transform(NodeTransform::identity().with_position(Vector3::new(0.0, 1.0, 0.0)))
///     .with_child(
///         SceneNode::new("torso")
///             .with_mesh(box_mesh(Point3::new(-0.5, -0.5, -0.1), Point3::new(0.5, 0.5, 0.1)))
///             .with_material(MaterialSlot::single(Material::new("cotton"))),
///     );
///
/// let bounds = shirt.world_bounds();
/// assert!((bounds.center().y - 1.0).abs() < 1e-12);
/// assert_eq!(shirt.mesh_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name as found in the source file.
    name: String,

    /// Transform relative to the parent.
    transform: NodeTransform,

    /// Geometry, if this is a mesh node.
    mesh: Option<IndexedMesh>,

    /// Material binding, if this is a mesh node.
    material: Option<MaterialSlot>,

    /// Is this node (and its subtree) rendered?
    visible: bool,

    /// Child nodes.
    children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty group node with identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: NodeTransform::identity(),
            mesh: None,
            material: None,
            visible: true,
            children: Vec::new(),
        }
    }

    /// Get the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the local transform.
    #[must_use]
    pub const fn transform(&self) -> &NodeTransform {
        &self.transform
    }

    /// Get a mutable reference to the local transform.
    pub const fn transform_mut(&mut self) -> &mut NodeTransform {
        &mut self.transform
    }

    /// Get the mesh, if any.
    #[must_use]
    pub const fn mesh(&self) -> Option<&IndexedMesh> {
        self.mesh.as_ref()
    }

    /// Get the material binding, if any.
    #[must_use]
    pub const fn material(&self) -> Option<&MaterialSlot> {
        self.material.as_ref()
    }

    /// Get a mutable reference to the material binding.
    pub const fn material_mut(&mut self) -> Option<&mut MaterialSlot> {
        self.material.as_mut()
    }

    /// Check if the node is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Get the child nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Set the local transform (builder pattern).
    #[must_use]
    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach mesh data (builder pattern).
    #[must_use]
    pub fn with_mesh(mut self, mesh: IndexedMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Bind material(s) (builder pattern).
    #[must_use]
    pub fn with_material(mut self, material: MaterialSlot) -> Self {
        self.material = Some(material);
        self
    }

    /// Set visibility (builder pattern).
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append a child node (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that carry a mesh.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
            + self.children.iter().map(Self::mesh_count).sum::<usize>()
    }

    /// Total vertex count of all meshes in this subtree.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, IndexedMesh::vertex_count)
            + self.children.iter().map(Self::vertex_count).sum::<usize>()
    }

    /// Find the first node with the given name (depth-first, pre-order).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Visit every node depth-first with its world matrix.
    ///
    /// `parent` is the world matrix of this node's parent.
    pub fn visit(&self, parent: &Matrix4<f64>, f: &mut impl FnMut(&Self, &Matrix4<f64>)) {
        let world = parent * self.transform.to_matrix();
        f(self, &world);
        for child in &self.children {
            child.visit(&world, f);
        }
    }

    /// Visit every node depth-first, mutably.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    /// World-space box of every vertex under this node.
    ///
    /// The node's own transform is included and treated as the world root.
    /// Returns an empty box if the subtree has no vertices.
    #[must_use]
    pub fn world_bounds(&self) -> Bounds3 {
        self.world_bounds_with_root(&self.transform)
    }

    /// World-space box evaluated as if this node carried `root` as its
    /// own transform.
    ///
    /// Lets callers measure a node "as reset" or "as scaled" without
    /// touching it. Each vertex is transformed individually, so the result
    /// is tight under rotation.
    #[must_use]
    pub fn world_bounds_with_root(&self, root: &NodeTransform) -> Bounds3 {
        let root_matrix = root.to_matrix();
        let mut bounds = Bounds3::empty();

        self.accumulate_bounds(&root_matrix, &mut bounds);
        for child in &self.children {
            child.visit(&root_matrix, &mut |node, world| {
                node.accumulate_bounds(world, &mut bounds);
            });
        }
        bounds
    }

    fn accumulate_bounds(&self, world: &Matrix4<f64>, bounds: &mut Bounds3) {
        if let Some(mesh) = &self.mesh {
            for position in mesh.positions() {
                bounds.expand_to_include(&world.transform_point(position));
            }
        }
    }

    pub(crate) const fn set_visible_flag(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn release(&mut self) {
        self.mesh = None;
        self.material = None;
        self.children.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use approx::assert_relative_eq;
    use mesh_types::{Point3, box_mesh};
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_4;

    fn unit_box(name: &str) -> SceneNode {
        SceneNode::new(name).with_mesh(box_mesh(
            Point3::new(-0.5, -0.5, -0.5),
            Point3::new(0.5, 0.5, 0.5),
        ))
    }

    #[test]
    fn empty_group_has_empty_bounds() {
        let node = SceneNode::new("group").with_child(SceneNode::new("inner"));
        assert!(node.world_bounds().is_empty());
        assert_eq!(node.node_count(), 2);
        assert_eq!(node.mesh_count(), 0);
    }

    #[test]
    fn bounds_include_root_and_child_transforms() {
        let node = SceneNode::new("root")
            .with_transform(NodeTransform::from_scale(Vector3::new(2.0, 2.0, 2.0)))
            .with_child(unit_box("a").with_transform(
                NodeTransform::identity().with_position(Vector3::new(1.0, 0.0, 0.0)),
            ));

        let b = node.world_bounds();
        assert_relative_eq!(b.min.x, 1.0);
        assert_relative_eq!(b.max.x, 3.0);
        assert_relative_eq!(b.min.y, -1.0);
        assert_relative_eq!(b.max.y, 1.0);
    }

    #[test]
    fn bounds_with_root_override_ignores_own_transform() {
        let node = unit_box("a").with_transform(
            NodeTransform::identity()
                .with_position(Vector3::new(5.0, 5.0, 5.0))
                .with_uniform_scale(3.0),
        );

        let reset = node.world_bounds_with_root(&NodeTransform::identity());
        assert_relative_eq!(reset.size(), Vector3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(reset.center(), Point3::origin());
    }

    #[test]
    fn rotated_bounds_are_tight() {
        // A flat square rotated 45 degrees about Y spans sqrt(2) in x and z.
        let node = SceneNode::new("plate")
            .with_mesh(box_mesh(Point3::new(-0.5, 0.0, -0.5), Point3::new(0.5, 0.0, 0.5)))
            .with_transform(NodeTransform::identity().with_rotation(Vector3::y(), FRAC_PI_4));

        let b = node.world_bounds();
        assert_relative_eq!(b.size().x, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(b.size().z, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(b.size().y, 0.0);
    }

    #[test]
    fn find_is_depth_first() {
        let node = SceneNode::new("root")
            .with_child(SceneNode::new("left").with_child(unit_box("sleeve")))
            .with_child(unit_box("sleeve").with_visible(false));

        let found = node.find("sleeve");
        assert!(found.is_some_and(SceneNode::is_visible));
        assert!(node.find("collar").is_none());
        assert_eq!(node.vertex_count(), 16);
    }

    #[test]
    fn visit_mut_reaches_every_node() {
        let mut node = SceneNode::new("root")
            .with_child(unit_box("a").with_child(unit_box("b")))
            .with_child(unit_box("c"));

        let mut names = Vec::new();
        node.visit_mut(&mut |n| {
            names.push(n.name().to_string());
            n.material = Some(MaterialSlot::single(Material::new("m")));
        });

        assert_eq!(names, ["root", "a", "b", "c"]);
        assert!(node.children()[0].children()[0].material().is_some());
    }

    #[test]
    fn release_drops_geometry() {
        let mut node = unit_box("a").with_child(unit_box("b"));
        node.release();
        assert!(node.mesh().is_none());
        assert!(node.children().is_empty());
        assert!(node.world_bounds().is_empty());
    }
}
