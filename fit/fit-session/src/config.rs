//! Session configuration.

use fit_garment::FitParams;
use fit_measure::{AvatarNormalization, KeyPointFractions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`SceneManager`](crate::SceneManager).
///
/// # Example
///
/// ```
/// use fit_session::SessionConfig;
/// use fit_garment::{FitParams, ZeroWidthPolicy};
///
/// let config = SessionConfig::default()
///     .with_normalize_avatar(false)
///     .with_fit(FitParams::new().with_zero_width_policy(ZeroWidthPolicy::Unbounded));
///
/// assert!(!config.normalize_avatar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Garment fitting parameters.
    pub fit: FitParams,

    /// Rescale and ground avatars on load. Default: true.
    pub normalize_avatar: bool,

    /// Normalization target, used when `normalize_avatar` is set.
    pub normalization: AvatarNormalization,

    /// Key point placement for avatar analysis.
    pub key_points: KeyPointFractions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fit: FitParams::default(),
            normalize_avatar: true,
            normalization: AvatarNormalization::default(),
            key_points: KeyPointFractions::default(),
        }
    }
}

impl SessionConfig {
    /// Set the fitting parameters (builder pattern).
    #[must_use]
    pub const fn with_fit(mut self, fit: FitParams) -> Self {
        self.fit = fit;
        self
    }

    /// Enable or disable avatar normalization (builder pattern).
    #[must_use]
    pub const fn with_normalize_avatar(mut self, normalize: bool) -> Self {
        self.normalize_avatar = normalize;
        self
    }

    /// Set the normalization target (builder pattern).
    #[must_use]
    pub const fn with_normalization(mut self, normalization: AvatarNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Set the key point fractions (builder pattern).
    #[must_use]
    pub const fn with_key_points(mut self, key_points: KeyPointFractions) -> Self {
        self.key_points = key_points;
        self
    }
}
