//! Local transforms of scene nodes.

use nalgebra::{Matrix4, Point3, Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position, rotation and scale of a node relative to its parent.
///
/// The local matrix is `T * R * S`: scale first, then rotate, then
/// translate. This is the composition glTF nodes use.
///
/// # Example
///
/// ```
/// use mesh_scene::NodeTransform;
/// use nalgebra::{Point3, Vector3};
///
/// let t = NodeTransform::identity()
///     .with_scale(Vector3::new(2.0, 1.0, 1.0))
///     .with_position(Vector3::new(0.0, 3.0, 0.0));
///
/// let p = t.transform_point(&Point3::new(1.0, 1.0, 0.0));
/// assert_eq!(p, Point3::new(2.0, 4.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeTransform {
    /// Translation.
    pub position: Vector3<f64>,
    /// Orientation.
    pub rotation: UnitQuaternion<f64>,
    /// Per-axis scale.
    pub scale: Vector3<f64>,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl NodeTransform {
    /// The transform that leaves geometry unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// A pure scale transform.
    #[must_use]
    pub fn from_scale(scale: Vector3<f64>) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    /// Set the translation (builder pattern).
    #[must_use]
    pub const fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    /// Set the per-axis scale (builder pattern).
    #[must_use]
    pub const fn with_scale(mut self, scale: Vector3<f64>) -> Self {
        self.scale = scale;
        self
    }

    /// Set the same scale on all axes (builder pattern).
    #[must_use]
    pub fn with_uniform_scale(mut self, factor: f64) -> Self {
        self.scale = Vector3::new(factor, factor, factor);
        self
    }

    /// Set the rotation from axis-angle (builder pattern).
    ///
    /// A zero-length axis leaves the rotation unchanged.
    #[must_use]
    pub fn with_rotation(mut self, axis: Vector3<f64>, angle: f64) -> Self {
        if let Some(axis) = Unit::try_new(axis, 1e-10) {
            self.rotation = UnitQuaternion::from_axis_angle(&axis, angle);
        }
        self
    }

    /// Local matrix `T * R * S`.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply the transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let scaled = Point3::from(point.coords.component_mul(&self.scale));
        self.rotation.transform_point(&scaled) + self.position
    }

    /// Check whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.position.norm() <= epsilon
            && self.rotation.angle() <= epsilon
            && (self.scale - Vector3::new(1.0, 1.0, 1.0)).norm() <= epsilon
    }
}
