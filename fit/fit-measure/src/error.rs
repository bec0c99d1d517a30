//! Error types for measurement operations.

use mesh_types::Axis;
use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur while measuring a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MeasureError {
    /// The node tree contains no vertices to measure.
    #[error("model has no vertices to measure")]
    InvalidMesh,

    /// The model has zero extent where a non-zero one is required.
    #[error("model has zero extent along the {axis} axis")]
    DegenerateGeometry {
        /// The collapsed axis.
        axis: Axis,
    },

    /// A vertex or transform holds NaN or an infinite coordinate.
    #[error("model has non-finite coordinates")]
    NonFiniteGeometry,
}
