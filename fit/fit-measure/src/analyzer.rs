//! Avatar geometry analysis.

use mesh_scene::{NodeTransform, SceneNode};
use mesh_types::{Bounds3, Matrix4, Point3, Vector3};
use tracing::{debug, warn};

use crate::error::{MeasureError, MeasureResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anatomical reference points on an avatar.
///
/// All points lie on the vertical axis through the bounds center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPoints {
    /// Head anchor.
    pub head: Point3<f64>,
    /// Shoulder line.
    pub shoulders: Point3<f64>,
    /// Chest anchor for tops and jackets.
    pub chest: Point3<f64>,
    /// Waist anchor for pants.
    pub waist: Point3<f64>,
}

/// Depth of each key point below the top of the avatar, as a fraction of
/// its height.
///
/// # Example
///
/// ```
/// use fit_measure::KeyPointFractions;
///
/// let fractions = KeyPointFractions::default().with_waist(0.55);
/// assert_eq!(fractions.head, 0.10);
/// assert_eq!(fractions.waist, 0.55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPointFractions {
    /// Head depth. Default: 0.10.
    pub head: f64,
    /// Shoulder depth. Default: 0.25.
    pub shoulders: f64,
    /// Chest depth. Default: 0.30.
    pub chest: f64,
    /// Waist depth. Default: 0.50.
    pub waist: f64,
}

impl Default for KeyPointFractions {
    fn default() -> Self {
        Self {
            head: 0.10,
            shoulders: 0.25,
            chest: 0.30,
            waist: 0.50,
        }
    }
}

impl KeyPointFractions {
    /// Set the head depth.
    #[must_use]
    pub const fn with_head(mut self, head: f64) -> Self {
        self.head = head;
        self
    }

    /// Set the shoulder depth.
    #[must_use]
    pub const fn with_shoulders(mut self, shoulders: f64) -> Self {
        self.shoulders = shoulders;
        self
    }

    /// Set the chest depth.
    #[must_use]
    pub const fn with_chest(mut self, chest: f64) -> Self {
        self.chest = chest;
        self
    }

    /// Set the waist depth.
    #[must_use]
    pub const fn with_waist(mut self, waist: f64) -> Self {
        self.waist = waist;
        self
    }
}

/// Measurements of an avatar, taken once per load.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvatarData {
    /// World-space bounds at analysis time.
    pub bounds: Bounds3,
    /// Midpoint of `bounds`.
    pub center: Point3<f64>,
    /// Extents of `bounds`.
    pub size: Vector3<f64>,
    /// Anatomical anchors.
    pub key_points: KeyPoints,
}

impl AvatarData {
    /// Derive avatar data from a world-space box.
    ///
    /// # Example
    ///
    /// ```
    /// use fit_measure::{AvatarData, KeyPointFractions};
    /// use mesh_types::{Bounds3, Point3};
    ///
    /// let bounds = Bounds3::new(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25));
    /// let avatar = AvatarData::from_bounds(bounds, &KeyPointFractions::default());
    ///
    /// assert!((avatar.key_points.head.y - 0.8).abs() < 1e-12);
    /// assert!((avatar.key_points.waist.y - 0.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_bounds(bounds: Bounds3, fractions: &KeyPointFractions) -> Self {
        let center = bounds.center();
        let size = bounds.size();
        let at = |fraction: f64| Point3::new(center.x, bounds.max.y - fraction * size.y, center.z);

        Self {
            bounds,
            center,
            size,
            key_points: KeyPoints {
                head: at(fractions.head),
                shoulders: at(fractions.shoulders),
                chest: at(fractions.chest),
                waist: at(fractions.waist),
            },
        }
    }
}

/// World-space bounding box of every vertex under `node`.
///
/// Each vertex is transformed by its node's world matrix, the root's own
/// transform included.
///
/// # Errors
///
/// See [`compute_bounds_with_root`].
pub fn compute_bounds(node: &SceneNode) -> MeasureResult<Bounds3> {
    compute_bounds_with_root(node, node.transform())
}

/// Like [`compute_bounds`], but evaluates the tree as if its root carried
/// `root` instead of its own transform.
///
/// # Errors
///
/// - [`MeasureError::InvalidMesh`] if the tree holds no vertices.
/// - [`MeasureError::NonFiniteGeometry`] if a vertex or transform is NaN or
///   infinite.
pub fn compute_bounds_with_root(node: &SceneNode, root: &NodeTransform) -> MeasureResult<Bounds3> {
    if !world_vertices_finite(node, root) {
        warn!(node = node.name(), "Rejecting model with non-finite coordinates");
        return Err(MeasureError::NonFiniteGeometry);
    }
    let bounds = node.world_bounds_with_root(root);
    if bounds.is_empty() {
        return Err(MeasureError::InvalidMesh);
    }
    Ok(bounds)
}

/// True if every vertex lands on finite world coordinates. Catches NaN or
/// infinite positions as well as transforms that produce them.
fn world_vertices_finite(node: &SceneNode, root: &NodeTransform) -> bool {
    let finite_under = |node: &SceneNode, world: &Matrix4<f64>| {
        node.mesh().is_none_or(|mesh| {
            mesh.positions()
                .all(|p| world.transform_point(p).coords.iter().all(|c| c.is_finite()))
        })
    };

    let root_matrix = root.to_matrix();
    let mut finite = finite_under(node, &root_matrix);
    for child in node.children() {
        child.visit(&root_matrix, &mut |node, world| {
            finite &= finite_under(node, world);
        });
    }
    finite
}

/// Analyze an avatar with the default key point fractions.
///
/// Does not modify the avatar.
///
/// # Errors
///
/// See [`compute_bounds_with_root`].
///
/// # Example
///
/// ```
/// use fit_measure::analyze_avatar;
/// use mesh_scene::SceneNode;
/// use mesh_types::{box_mesh, Point3};
///
/// let avatar = SceneNode::new("avatar")
///     .with_mesh(box_mesh(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25)));
///
/// let data = analyze_avatar(&avatar).unwrap();
/// assert!((data.size.y - 2.0).abs() < 1e-12);
/// assert!((data.key_points.chest.y - 0.4).abs() < 1e-12);
/// ```
pub fn analyze_avatar(node: &SceneNode) -> MeasureResult<AvatarData> {
    analyze_avatar_with(node, &KeyPointFractions::default())
}

/// Analyze an avatar with explicit key point fractions.
///
/// # Errors
///
/// See [`compute_bounds_with_root`].
pub fn analyze_avatar_with(
    node: &SceneNode,
    fractions: &KeyPointFractions,
) -> MeasureResult<AvatarData> {
    let bounds = compute_bounds(node)?;
    let data = AvatarData::from_bounds(bounds, fractions);

    debug!(
        avatar = node.name(),
        width = data.size.x,
        height = data.size.y,
        depth = data.size.z,
        "Analyzed avatar"
    );

    Ok(data)
}
