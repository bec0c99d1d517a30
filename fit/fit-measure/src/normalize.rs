//! Avatar normalization.
//!
//! Avatars arrive in arbitrary units and origins. Normalizing brings every
//! avatar to the same height range before it is analyzed, so fitting works
//! with comparable numbers regardless of the source file.

use mesh_scene::{NodeTransform, SceneNode};
use mesh_types::{Axis, MIN_EXTENT};
use tracing::{debug, warn};

use crate::analyzer::compute_bounds_with_root;
use crate::error::{MeasureError, MeasureResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for [`normalize_avatar_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvatarNormalization {
    /// Longest extent after normalization. Default: 2.0.
    pub target_extent: f64,
    /// Root `y` position after normalization. Default: -1.0.
    pub ground_height: f64,
}

impl Default for AvatarNormalization {
    fn default() -> Self {
        Self {
            target_extent: 2.0,
            ground_height: -1.0,
        }
    }
}

impl AvatarNormalization {
    /// Set the target extent.
    #[must_use]
    pub const fn with_target_extent(mut self, target_extent: f64) -> Self {
        self.target_extent = target_extent;
        self
    }

    /// Set the ground height.
    #[must_use]
    pub const fn with_ground_height(mut self, ground_height: f64) -> Self {
        self.ground_height = ground_height;
        self
    }
}

/// Compute the normalizing root transform with default parameters.
///
/// # Errors
///
/// See [`normalize_avatar_with`].
///
/// # Example
///
/// ```
/// use fit_measure::normalize_avatar;
/// use mesh_scene::SceneNode;
/// use mesh_types::{box_mesh, Point3};
///
/// // A 180-unit tall avatar standing on the origin.
/// let avatar = SceneNode::new("avatar")
///     .with_mesh(box_mesh(Point3::new(-25.0, 0.0, -15.0), Point3::new(25.0, 180.0, 15.0)));
///
/// let t = normalize_avatar(&avatar).unwrap();
/// assert!((t.scale.y - 2.0 / 180.0).abs() < 1e-12);
/// assert_eq!(t.position.y, -1.0);
/// ```
pub fn normalize_avatar(node: &SceneNode) -> MeasureResult<NodeTransform> {
    normalize_avatar_with(node, &AvatarNormalization::default())
}

/// Compute the root transform that rescales the avatar so its longest
/// extent equals `target_extent`, recenters it on the origin and places the
/// root at `ground_height`.
///
/// The avatar is measured with its root transform reset, so the result does
/// not depend on any earlier placement. Rotation is identity; the caller
/// installs the transform on the root.
///
/// # Errors
///
/// - [`MeasureError::InvalidMesh`] if the avatar holds no vertices.
/// - [`MeasureError::NonFiniteGeometry`] if a vertex is NaN or infinite.
/// - [`MeasureError::DegenerateGeometry`] if every extent is zero.
pub fn normalize_avatar_with(
    node: &SceneNode,
    params: &AvatarNormalization,
) -> MeasureResult<NodeTransform> {
    let bounds = compute_bounds_with_root(node, &NodeTransform::identity())?;

    let max_extent = bounds.max_extent();
    if max_extent <= MIN_EXTENT {
        warn!(avatar = node.name(), "Cannot normalize a point-sized avatar");
        return Err(MeasureError::DegenerateGeometry { axis: Axis::X });
    }

    let scale = params.target_extent / max_extent;
    let mut position = -bounds.center().coords * scale;
    position.y = params.ground_height;

    debug!(avatar = node.name(), scale, "Normalized avatar");

    Ok(NodeTransform::identity()
        .with_uniform_scale(scale)
        .with_position(position))
}

/// Apply [`normalize_avatar_with`] to the avatar's root.
///
/// # Errors
///
/// See [`normalize_avatar_with`].
pub fn normalize_in_place(node: &mut SceneNode, params: &AvatarNormalization) -> MeasureResult<()> {
    let transform = normalize_avatar_with(node, params)?;
    *node.transform_mut() = transform;
    Ok(())
}
