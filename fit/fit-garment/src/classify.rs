//! Garment classification by bounding-box proportions.

use std::fmt;
use std::str::FromStr;

use mesh_scene::{NodeTransform, SceneNode};
use mesh_types::{Axis, MIN_EXTENT, Vector3};
use tracing::{debug, warn};

use crate::error::{FitError, FitResult, ParseClothingTypeError};
use crate::params::{FitParams, ZeroWidthPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Garment category, derived from shape alone.
///
/// The text form is lowercase: `fullbody`, `jacket`, `top`, `pants`, `hat`,
/// `default`.
///
/// # Example
///
/// ```
/// use fit_garment::ClothingType;
///
/// let t: ClothingType = "jacket".parse().unwrap();
/// assert_eq!(t, ClothingType::Jacket);
/// assert_eq!(ClothingType::Fullbody.to_string(), "fullbody");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClothingType {
    /// Dresses, overalls, robes.
    Fullbody,
    /// Coats and jackets.
    Jacket,
    /// Shirts and tops.
    Top,
    /// Trousers and skirts.
    Pants,
    /// Hats and other headwear.
    Hat,
    /// Anything else; scaled uniformly to fit inside the avatar.
    Default,
}

impl ClothingType {
    /// Every garment type.
    pub const ALL: [Self; 6] = [
        Self::Fullbody,
        Self::Jacket,
        Self::Top,
        Self::Pants,
        Self::Hat,
        Self::Default,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullbody => "fullbody",
            Self::Jacket => "jacket",
            Self::Top => "top",
            Self::Pants => "pants",
            Self::Hat => "hat",
            Self::Default => "default",
        }
    }

    /// Whether this type is fitted with the same factor on every axis.
    #[must_use]
    pub const fn is_uniform(self) -> bool {
        matches!(self, Self::Hat | Self::Default)
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingType {
    type Err = ParseClothingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseClothingTypeError(s.to_string()))
    }
}

/// Aspect ratio cut-offs used by [`classify_aspect_ratio`].
///
/// Aspect is height over width. Rules are tested in order and the first
/// match wins:
///
/// 1. `aspect > fullbody` is [`ClothingType::Fullbody`]
/// 2. `aspect > jacket` is [`ClothingType::Jacket`]
/// 3. `aspect > top` is [`ClothingType::Top`]
/// 4. `aspect < hat` is [`ClothingType::Hat`]
/// 5. otherwise [`ClothingType::Pants`]
///
/// With the defaults, rule 4 can only fire below 0.3, and everything in
/// `[0.3, 0.4]` lands on Pants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassificationThresholds {
    /// Default: 1.5.
    pub fullbody: f64,
    /// Default: 0.8.
    pub jacket: f64,
    /// Default: 0.4.
    pub top: f64,
    /// Default: 0.3.
    pub hat: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            fullbody: 1.5,
            jacket: 0.8,
            top: 0.4,
            hat: 0.3,
        }
    }
}

/// Classify a garment by its height-to-width ratio.
///
/// # Example
///
/// ```
/// use fit_garment::{classify_aspect_ratio, ClassificationThresholds, ClothingType};
///
/// let t = ClassificationThresholds::default();
/// assert_eq!(classify_aspect_ratio(2.0, &t), ClothingType::Fullbody);
/// assert_eq!(classify_aspect_ratio(0.35, &t), ClothingType::Pants);
/// assert_eq!(classify_aspect_ratio(0.25, &t), ClothingType::Hat);
/// ```
#[must_use]
pub fn classify_aspect_ratio(aspect: f64, thresholds: &ClassificationThresholds) -> ClothingType {
    if aspect > thresholds.fullbody {
        ClothingType::Fullbody
    } else if aspect > thresholds.jacket {
        ClothingType::Jacket
    } else if aspect > thresholds.top {
        ClothingType::Top
    } else if aspect < thresholds.hat {
        ClothingType::Hat
    } else {
        ClothingType::Pants
    }
}

/// Height-to-width ratio of a garment box.
///
/// # Errors
///
/// Returns [`FitError::DegenerateGeometry`] when the width is zero, unless
/// `policy` is [`ZeroWidthPolicy::Unbounded`] and the height is non-zero.
pub fn aspect_ratio(size: &Vector3<f64>, policy: ZeroWidthPolicy) -> FitResult<f64> {
    if size.x > MIN_EXTENT {
        return Ok(size.y / size.x);
    }
    match policy {
        ZeroWidthPolicy::Unbounded if size.y > MIN_EXTENT => Ok(f64::INFINITY),
        _ => Err(FitError::DegenerateGeometry { axis: Axis::X }),
    }
}

/// Classify a garment with default parameters.
///
/// The garment is measured with its root transform reset, so any scale or
/// offset applied by an earlier fit does not change the result.
///
/// # Errors
///
/// - [`FitError::Measure`] if the garment holds no vertices.
/// - [`FitError::DegenerateGeometry`] if the garment has zero width.
///
/// # Example
///
/// ```
/// use fit_garment::{detect_clothing_type, ClothingType};
/// use mesh_scene::SceneNode;
/// use mesh_types::{box_mesh, Point3};
///
/// let cap = SceneNode::new("cap")
///     .with_mesh(box_mesh(Point3::new(-0.1, 0.0, -0.1), Point3::new(0.1, 0.04, 0.1)));
///
/// assert_eq!(detect_clothing_type(&cap).unwrap(), ClothingType::Hat);
/// ```
pub fn detect_clothing_type(node: &SceneNode) -> FitResult<ClothingType> {
    detect_clothing_type_with(node, &FitParams::default())
}

/// Classify a garment using `params`' thresholds and zero-width policy.
///
/// [`FitParams::clothing_type_override`] is not consulted here.
///
/// # Errors
///
/// See [`detect_clothing_type`].
pub fn detect_clothing_type_with(node: &SceneNode, params: &FitParams) -> FitResult<ClothingType> {
    let size = fit_measure::compute_bounds_with_root(node, &NodeTransform::identity())?.size();
    let aspect = aspect_ratio(&size, params.zero_width_policy).inspect_err(|_| {
        warn!(clothing = node.name(), "Garment has zero width");
    })?;

    let clothing_type = classify_aspect_ratio(aspect, &params.thresholds);
    debug!(clothing = node.name(), aspect, %clothing_type, "Classified garment");
    Ok(clothing_type)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mesh_types::{Point3, box_mesh};

    fn garment(width: f64, height: f64) -> SceneNode {
        SceneNode::new("garment").with_mesh(box_mesh(
            Point3::new(-width / 2.0, 0.0, -0.1),
            Point3::new(width / 2.0, height, 0.1),
        ))
    }

    #[test]
    fn reference_aspects() {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_aspect_ratio(2.0, &t), ClothingType::Fullbody);
        assert_eq!(classify_aspect_ratio(1.0, &t), ClothingType::Jacket);
        assert_eq!(classify_aspect_ratio(0.6, &t), ClothingType::Top);
        assert_eq!(classify_aspect_ratio(0.35, &t), ClothingType::Pants);
        assert_eq!(classify_aspect_ratio(0.25, &t), ClothingType::Hat);
    }

    #[test]
    fn boundaries_are_exclusive() {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_aspect_ratio(1.5, &t), ClothingType::Jacket);
        assert_eq!(classify_aspect_ratio(0.8, &t), ClothingType::Top);
        assert_eq!(classify_aspect_ratio(0.4, &t), ClothingType::Pants);
        assert_eq!(classify_aspect_ratio(0.3, &t), ClothingType::Pants);
    }

    #[test]
    fn custom_thresholds() {
        let t = ClassificationThresholds {
            fullbody: 3.0,
            ..ClassificationThresholds::default()
        };
        assert_eq!(classify_aspect_ratio(2.0, &t), ClothingType::Jacket);
    }

    #[test]
    fn detect_from_geometry() {
        assert_eq!(detect_clothing_type(&garment(0.4, 1.6)).unwrap(), ClothingType::Fullbody);
        assert_eq!(detect_clothing_type(&garment(0.6, 0.6)).unwrap(), ClothingType::Jacket);
        assert_eq!(detect_clothing_type(&garment(1.0, 0.6)).unwrap(), ClothingType::Top);
        assert_eq!(detect_clothing_type(&garment(1.0, 0.25)).unwrap(), ClothingType::Hat);
    }

    #[test]
    fn detect_ignores_root_transform() {
        // Squashed to a hat's proportions by its root scale, still a fullbody.
        let node = garment(0.4, 1.6)
            .with_transform(NodeTransform::from_scale(Vector3::new(4.0, 0.1, 1.0)));
        assert_eq!(detect_clothing_type(&node).unwrap(), ClothingType::Fullbody);
    }

    #[test]
    fn width_threshold_is_shared() {
        let at = Vector3::new(MIN_EXTENT, 1.0, 0.2);
        assert_eq!(
            aspect_ratio(&at, ZeroWidthPolicy::Reject),
            Err(FitError::DegenerateGeometry { axis: Axis::X })
        );
        let above = Vector3::new(2.0 * MIN_EXTENT, 1.0, 0.2);
        assert!(aspect_ratio(&above, ZeroWidthPolicy::Reject).is_ok());
    }

    #[test]
    fn zero_width_rejected_by_default() {
        let node = garment(0.0, 1.0);
        assert_eq!(
            detect_clothing_type(&node),
            Err(FitError::DegenerateGeometry { axis: Axis::X })
        );
    }

    #[test]
    fn zero_width_unbounded_is_fullbody() {
        let params = FitParams::default().with_zero_width_policy(ZeroWidthPolicy::Unbounded);
        let node = garment(0.0, 1.0);
        assert_eq!(
            detect_clothing_type_with(&node, &params).unwrap(),
            ClothingType::Fullbody
        );

        let flat = garment(0.0, 0.0);
        assert!(detect_clothing_type_with(&flat, &params).is_err());
    }

    #[test]
    fn empty_garment_is_measure_error() {
        assert!(matches!(
            detect_clothing_type(&SceneNode::new("empty")),
            Err(FitError::Measure(_))
        ));
    }

    #[test]
    fn clothing_type_text_form() {
        for t in ClothingType::ALL {
            assert_eq!(t.to_string().parse::<ClothingType>().unwrap(), t);
        }
        assert_eq!("TOP".parse::<ClothingType>().unwrap(), ClothingType::Top);
        assert!("cape".parse::<ClothingType>().is_err());
    }

    #[test]
    fn uniform_types() {
        assert!(ClothingType::Hat.is_uniform());
        assert!(ClothingType::Default.is_uniform());
        assert!(!ClothingType::Fullbody.is_uniform());
    }
}
