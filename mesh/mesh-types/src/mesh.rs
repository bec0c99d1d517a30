//! Triangle geometry attached to scene nodes.

use crate::{Bounds3, MeshBounds, Vertex};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle geometry in a node's local space.
///
/// `faces` index into `vertices`. Fitting reads positions only; faces ride
/// along so the host can render the mesh it handed in.
///
/// ```
/// use mesh_types::{IndexedMesh, MeshBounds};
///
/// let sleeve = IndexedMesh::from_buffers(
///     &[[0.0, 0.0, 0.0], [0.3, 0.0, 0.0], [0.0, 0.6, 0.1]],
///     &[0, 1, 2],
/// )
/// .unwrap();
///
/// assert_eq!(sleeve.face_count(), 1);
/// assert!((sleeve.bounds().size().y - 0.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Vertex>,

    /// Triangles, counter-clockwise when seen from outside.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// A mesh with no geometry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Assemble a mesh from already built parts.
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Build a mesh from decoded accessor data: one `[x, y, z]` per vertex
    /// and a flat triangle-list index buffer.
    ///
    /// Returns `None` if the index count is not a multiple of three or an
    /// index points past the last vertex.
    #[must_use]
    pub fn from_buffers(positions: &[[f64; 3]], indices: &[u32]) -> Option<Self> {
        if indices.len() % 3 != 0 {
            return None;
        }
        let in_range = |i: &u32| usize::try_from(*i).is_ok_and(|i| i < positions.len());
        if !indices.iter().all(in_range) {
            return None;
        }

        Some(Self {
            vertices: positions.iter().copied().map(Vertex::from).collect(),
            faces: indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect(),
        })
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when there is no vertex to measure.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Local-space vertex positions.
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.vertices.iter().map(|v| &v.position)
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(self.positions())
    }
}

/// A closed box spanning `min`..`max`: eight vertices, twelve triangles.
///
/// Stands in for avatar or garment geometry in tests and demos.
///
/// ```
/// use mesh_types::{box_mesh, MeshBounds, Point3};
///
/// let torso = box_mesh(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25));
/// assert_eq!(torso.vertex_count(), 8);
/// assert_eq!(torso.face_count(), 12);
/// assert!((torso.bounds().size().y - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn box_mesh(min: Point3<f64>, max: Point3<f64>) -> IndexedMesh {
    let corners = Bounds3::new(min, max).corners();

    // Corner index bits: 1 = max x, 2 = max y, 4 = max z.
    let faces = vec![
        [0, 2, 3],
        [0, 3, 1],
        [4, 5, 7],
        [4, 7, 6],
        [0, 1, 5],
        [0, 5, 4],
        [2, 6, 7],
        [2, 7, 3],
        [0, 4, 6],
        [0, 6, 2],
        [1, 3, 7],
        [1, 7, 5],
    ];

    IndexedMesh::from_parts(corners.map(Vertex::new).to_vec(), faces)
}
