//! Fitting parameters.

use crate::classify::{ClassificationThresholds, ClothingType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a garment whose width is zero.
///
/// Height over width is undefined for such a garment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroWidthPolicy {
    /// Fail with [`FitError::DegenerateGeometry`](crate::FitError::DegenerateGeometry).
    #[default]
    Reject,
    /// Treat the aspect as `+inf`, which classifies as
    /// [`ClothingType::Fullbody`]. A garment with zero height as well is
    /// still rejected.
    Unbounded,
}

/// Size and placement factors for each garment type.
///
/// Scale factors are relative to the avatar's extent on the same axis;
/// offsets move the anchor point up (`lift`) or down (`drop`).
///
/// | Type | Scale | Anchor |
/// |---|---|---|
/// | Fullbody | `fullbody_width`, `fullbody_height`, `fullbody_depth` of avatar | center, down `fullbody_drop` x avatar height |
/// | Jacket, Top | girth `top_girth`, height `top_height` x avatar height | chest, up `top_lift` x garment height |
/// | Pants | girth `pants_girth`, height `pants_height` x avatar height | waist, down `pants_drop` x garment height |
/// | Hat | uniform, largest extent = `hat_height` x avatar height | head, up `hat_lift` x hat height |
/// | Default | uniform, smallest ratio x `default_margin` | center |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitProportions {
    /// Default: 0.95.
    pub fullbody_width: f64,
    /// Default: 0.90.
    pub fullbody_height: f64,
    /// Default: 0.95.
    pub fullbody_depth: f64,
    /// Default: 0.05.
    pub fullbody_drop: f64,

    /// Default: 0.4.
    pub top_height: f64,
    /// Default: 1.02.
    pub top_girth: f64,
    /// Default: 0.1.
    pub top_lift: f64,

    /// Default: 0.5.
    pub pants_height: f64,
    /// Default: 1.0.
    pub pants_girth: f64,
    /// Default: 0.3.
    pub pants_drop: f64,

    /// Default: 0.15.
    pub hat_height: f64,
    /// Default: 0.2.
    pub hat_lift: f64,

    /// Default: 1.02.
    pub default_margin: f64,
}

impl Default for FitProportions {
    fn default() -> Self {
        Self {
            fullbody_width: 0.95,
            fullbody_height: 0.90,
            fullbody_depth: 0.95,
            fullbody_drop: 0.05,
            top_height: 0.4,
            top_girth: 1.02,
            top_lift: 0.1,
            pants_height: 0.5,
            pants_girth: 1.0,
            pants_drop: 0.3,
            hat_height: 0.15,
            hat_lift: 0.2,
            default_margin: 1.02,
        }
    }
}

/// Parameters for fitting a garment to an avatar.
///
/// # Example
///
/// ```
/// use fit_garment::{ClothingType, FitParams, ZeroWidthPolicy};
///
/// let params = FitParams::new()
///     .with_zero_width_policy(ZeroWidthPolicy::Unbounded)
///     .with_clothing_type(ClothingType::Hat);
///
/// assert_eq!(params.clothing_type_override, Some(ClothingType::Hat));
/// assert_eq!(params.thresholds.fullbody, 1.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitParams {
    /// Aspect ratio cut-offs for classification.
    pub thresholds: ClassificationThresholds,

    /// Per-type scale and placement factors.
    pub proportions: FitProportions,

    /// Handling of zero-width garments during classification.
    pub zero_width_policy: ZeroWidthPolicy,

    /// Skip classification and fit as this type.
    pub clothing_type_override: Option<ClothingType>,
}

impl FitParams {
    /// Creates parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classification thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the per-type proportions.
    #[must_use]
    pub const fn with_proportions(mut self, proportions: FitProportions) -> Self {
        self.proportions = proportions;
        self
    }

    /// Sets the zero-width policy.
    #[must_use]
    pub const fn with_zero_width_policy(mut self, policy: ZeroWidthPolicy) -> Self {
        self.zero_width_policy = policy;
        self
    }

    /// Forces a garment type instead of classifying.
    #[must_use]
    pub const fn with_clothing_type(mut self, clothing_type: ClothingType) -> Self {
        self.clothing_type_override = Some(clothing_type);
        self
    }
}
