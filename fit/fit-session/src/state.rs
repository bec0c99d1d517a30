//! Presentation state of a session.

use mesh_scene::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the host should show, independent of whether models are loaded.
///
/// Visibility and color persist across clothing loads: a garment installed
/// later picks them up. The fitting core never reads this.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneState {
    /// Whether the garment is shown. Default: true.
    pub clothing_visible: bool,

    /// Tint chosen by the user, if any. Default: none, which leaves the
    /// garment's own materials alone.
    pub clothing_color: Option<Color>,

    /// An avatar is installed.
    pub has_avatar: bool,

    /// A garment is installed.
    pub has_clothing: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            clothing_visible: true,
            clothing_color: None,
            has_avatar: false,
            has_clothing: false,
        }
    }
}
