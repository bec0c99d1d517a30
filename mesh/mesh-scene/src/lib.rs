//! Host-side scene graph for garment fitting.
//!
//! Loaders (glTF/GLB parsers, engine bridges) produce a [`SceneNode`] tree
//! per model. This crate holds that tree in a renderer-independent form so
//! the measuring and fitting crates can work on it:
//!
//! - [`SceneNode`] - Named node with transform, optional mesh and materials
//! - [`NodeTransform`] - Position, rotation and scale (`T * R * S`)
//! - [`Material`] / [`MaterialSlot`] - `Arc`-shared single or multi materials
//! - [`Color`] - RGB color parsed from `#rrggbb`, `#rgb` or a CSS color name
//! - [`SceneHandle`] - Visibility, recolor and dispose controls
//!
//! # Layer 0 Crate
//!
//! No renderer or engine dependencies. World-space bounds are computed per
//! vertex from the node hierarchy, which is what a renderer would draw.
//!
//! # Example
//!
//! ```
//! use mesh_scene::{Material, MaterialSlot, SceneHandle, SceneNode};
//! use mesh_types::{box_mesh, Point3};
//!
//! let mut jacket = SceneNode::new("jacket").with_child(
//!     SceneNode::new("body")
//!         .with_mesh(box_mesh(Point3::new(-0.3, 0.0, -0.1), Point3::new(0.3, 0.6, 0.1)))
//!         .with_material(MaterialSlot::single(Material::new("leather"))),
//! );
//!
//! let recolored = jacket.set_color("#8b4513".parse().unwrap());
//! assert_eq!(recolored, 1);
//!
//! jacket.set_visible(false);
//! assert!(!jacket.is_visible());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod handle;
mod material;
mod node;
mod transform;

pub use error::{SceneError, SceneResult};
pub use handle::SceneHandle;
pub use material::{Color, Material, MaterialSlot};
pub use node::SceneNode;
pub use transform::NodeTransform;
