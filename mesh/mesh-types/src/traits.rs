//! Shared geometry traits.

use crate::Bounds3;

/// Geometry that can report a box in its own local space.
pub trait MeshBounds {
    /// Local-space box around every vertex; empty if there are none.
    fn bounds(&self) -> Bounds3;

    /// Local-space box, or `None` when there is no vertex to measure.
    fn measurable_bounds(&self) -> Option<Bounds3> {
        Some(self.bounds()).filter(|b| !b.is_empty())
    }
}
