//! Error types for scene operations.

use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while manipulating a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SceneError {
    /// The string is not a recognized color.
    #[error("invalid color '{0}': expected #rrggbb, #rgb or a CSS color name")]
    InvalidColor(String),
}
