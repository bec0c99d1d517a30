//! Error types for session operations.

use fit_garment::FitError;
use fit_measure::MeasureError;
use mesh_scene::SceneError;
use thiserror::Error;

use crate::manager::LoadTicket;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a fitting session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Measuring or normalizing the avatar failed.
    #[error("avatar measurement failed: {0}")]
    Measure(#[from] MeasureError),

    /// Fitting the garment failed.
    #[error("garment fitting failed: {0}")]
    Fit(#[from] FitError),

    /// A presentation control was given bad input.
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// A clothing load finished after a newer one had started.
    #[error("clothing load {ticket} is stale; newest is {current}")]
    StaleLoad {
        /// The ticket of the finished load.
        ticket: LoadTicket,
        /// The newest ticket issued.
        current: LoadTicket,
    },
}
