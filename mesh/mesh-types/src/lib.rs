//! Core geometry types for garment fitting.
//!
//! This crate provides the foundational types shared by the scene graph,
//! the avatar analyzer and the clothing fitter:
//!
//! - [`Bounds3`] - Axis-aligned bounding box
//! - [`Vertex`] - A mesh vertex position
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Axis`] - Names a coordinate axis (used to report degenerate extents)
//!
//! # Layer 0 Crate
//!
//! This crate has **no renderer or engine dependencies**. Mesh loading
//! (glTF/GLB parsing) is done elsewhere; loaders hand finished vertex data
//! to [`IndexedMesh`].
//!
//! # Coordinate System
//!
//! Uses the glTF convention, a **right-handed, Y-up** system:
//! - X: width (left/right)
//! - Y: height (up/down)
//! - Z: depth (front/back)
//!
//! All coordinates are `f64` and unit-agnostic.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshBounds, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(-0.5, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.8, 0.2));
//! mesh.faces.push([0, 1, 2]);
//!
//! let bounds = mesh.bounds();
//! assert!((bounds.size().y - 1.8).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod axis;
mod bounds;
mod mesh;
mod traits;
mod vertex;

pub use axis::Axis;
pub use bounds::{Bounds3, MIN_EXTENT};
pub use mesh::{IndexedMesh, box_mesh};
pub use traits::MeshBounds;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};
