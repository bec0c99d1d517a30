//! Mesh vertices.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex.
///
/// Fitting only ever reads positions, so that is all a vertex stores.
/// Shading attributes stay with the host's renderer.
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let v: Vertex = [1.0, 2.0, 3.0].into();
/// assert_eq!(v, Vertex::new(Point3::new(1.0, 2.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in the owning node's local space.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex at `position`.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(coords: [f64; 3]) -> Self {
        Self::new(Point3::from(coords))
    }
}
