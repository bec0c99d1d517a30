//! Avatar geometry analysis.
//!
//! Measures loaded models in world space and derives the avatar data the
//! clothing fitter anchors garments to.
//!
//! # Features
//!
//! - **Bounds**: World-space bounding box of a node tree, optionally
//!   evaluated with a substituted root transform
//! - **Avatar analysis**: Center, size and key points (head, shoulders,
//!   chest, waist) at fixed fractions of the avatar height
//! - **Normalization**: Root transform that rescales an avatar to a
//!   standard height and grounds it
//!
//! # Layer 0 Crate
//!
//! No renderer or engine dependencies. Works on [`mesh_scene::SceneNode`]
//! trees built by any loader.
//!
//! # Example
//!
//! ```
//! use fit_measure::{analyze_avatar, normalize_avatar};
//! use mesh_scene::SceneNode;
//! use mesh_types::{box_mesh, Point3};
//!
//! let mut avatar = SceneNode::new("avatar")
//!     .with_mesh(box_mesh(Point3::new(-20.0, 0.0, -10.0), Point3::new(20.0, 170.0, 10.0)));
//!
//! *avatar.transform_mut() = normalize_avatar(&avatar).unwrap();
//! let data = analyze_avatar(&avatar).unwrap();
//!
//! assert!((data.size.y - 2.0).abs() < 1e-9);
//! assert!(data.key_points.head.y > data.key_points.waist.y);
//! ```
//!
//! # Coordinate System
//!
//! Y is up. Key points sit on the vertical line through the bounds center,
//! measured downward from the top of the avatar.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analyzer;
mod error;
mod normalize;

pub use analyzer::{
    AvatarData, KeyPointFractions, KeyPoints, analyze_avatar, analyze_avatar_with, compute_bounds,
    compute_bounds_with_root,
};
pub use error::{MeasureError, MeasureResult};
pub use normalize::{
    AvatarNormalization, normalize_avatar, normalize_avatar_with, normalize_in_place,
};
