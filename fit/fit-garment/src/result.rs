//! Result types for garment fitting.

use mesh_scene::NodeTransform;
use mesh_types::{Point3, Vector3};

use crate::classify::ClothingType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Root scale and position that fit a garment to an avatar.
///
/// Rotation is always identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitTransform {
    /// Per-axis scale.
    pub scale: Vector3<f64>,
    /// Root position.
    pub position: Vector3<f64>,
}

impl FitTransform {
    /// The equivalent node transform.
    #[must_use]
    pub fn to_node_transform(&self) -> NodeTransform {
        NodeTransform::from_scale(self.scale).with_position(self.position)
    }

    /// Whether every axis has the same scale.
    #[must_use]
    pub fn is_uniform(&self, epsilon: f64) -> bool {
        (self.scale.x - self.scale.y).abs() <= epsilon && (self.scale.y - self.scale.z).abs() <= epsilon
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.scale.iter().chain(self.position.iter()).all(|c| c.is_finite())
    }
}

impl From<FitTransform> for NodeTransform {
    fn from(fit: FitTransform) -> Self {
        fit.to_node_transform()
    }
}

/// Diagnostics of a single fit.
///
/// # Example
///
/// ```
/// use fit_garment::{fit_clothing, FitParams};
/// use fit_measure::analyze_avatar;
/// use mesh_scene::SceneNode;
/// use mesh_types::{box_mesh, Point3};
///
/// let avatar = SceneNode::new("avatar")
///     .with_mesh(box_mesh(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25)));
/// let shirt = SceneNode::new("shirt")
///     .with_mesh(box_mesh(Point3::new(-0.6, 0.0, -0.2), Point3::new(0.6, 0.7, 0.2)));
///
/// let report = fit_clothing(&shirt, &analyze_avatar(&avatar).unwrap(), &FitParams::default()).unwrap();
/// println!("{report}");
/// assert_eq!(report.clothing_type.to_string(), "top");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitReport {
    /// Garment type used for the fit.
    pub clothing_type: ClothingType,
    /// Height over width of the unscaled garment.
    pub aspect_ratio: f64,
    /// Extents of the unscaled garment.
    pub clothing_size: Vector3<f64>,
    /// Where the garment's bounds center was placed.
    pub target_position: Point3<f64>,
    /// The computed root transform.
    pub transform: FitTransform,
}

impl std::fmt::Display for FitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.transform.scale;
        let t = &self.target_position;
        write!(
            f,
            "{} (aspect {:.3}): scale ({:.4}, {:.4}, {:.4}) at ({:.4}, {:.4}, {:.4})",
            self.clothing_type, self.aspect_ratio, s.x, s.y, s.z, t.x, t.y, t.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_node_transform() {
        let fit = FitTransform {
            scale: Vector3::new(2.0, 1.0, 0.5),
            position: Vector3::new(0.0, -0.1, 0.0),
        };
        let t: NodeTransform = fit.into();
        assert_relative_eq!(t.scale, fit.scale);
        assert_relative_eq!(t.position, fit.position);
        assert!(!fit.is_uniform(1e-12));
        assert!(fit.is_finite());
    }

    #[test]
    fn test_non_finite_detected() {
        let fit = FitTransform {
            scale: Vector3::new(f64::INFINITY, 1.0, 1.0),
            position: Vector3::zeros(),
        };
        assert!(!fit.is_finite());
    }

    #[test]
    fn test_report_display() {
        let report = FitReport {
            clothing_type: ClothingType::Hat,
            aspect_ratio: 0.25,
            clothing_size: Vector3::new(0.2, 0.05, 0.2),
            target_position: Point3::new(0.0, 0.86, 0.0),
            transform: FitTransform {
                scale: Vector3::new(1.5, 1.5, 1.5),
                position: Vector3::zeros(),
            },
        };
        let text = report.to_string();
        assert!(text.starts_with("hat (aspect 0.250)"));
        assert!(text.contains("1.5000"));
    }
}
