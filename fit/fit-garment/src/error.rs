//! Error types for garment fitting.

use fit_measure::MeasureError;
use mesh_types::Axis;
use thiserror::Error;

use crate::classify::ClothingType;

/// Result type for garment fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors that can occur while classifying or fitting a garment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FitError {
    /// Measuring the garment failed.
    #[error("measurement failed: {0}")]
    Measure(#[from] MeasureError),

    /// The garment has zero extent along an axis the fit divides by.
    #[error("garment has zero extent along the {axis} axis")]
    DegenerateGeometry {
        /// The collapsed axis.
        axis: Axis,
    },

    /// The avatar has zero extent along an axis the fit scales by.
    #[error("avatar has zero extent along the {axis} axis")]
    DegenerateAvatar {
        /// The collapsed axis.
        axis: Axis,
    },

    /// The computed transform contains NaN or infinite components.
    #[error("fit for {clothing_type} produced a non-finite transform")]
    NonFiniteTransform {
        /// The garment type being fitted.
        clothing_type: ClothingType,
    },
}

/// Error returned when parsing an unknown garment type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown clothing type '{0}'")]
pub struct ParseClothingTypeError(pub String);
