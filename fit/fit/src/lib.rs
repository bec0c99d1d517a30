//! Automatic garment fitting toolkit.
//!
//! This umbrella crate re-exports the fitting crates under one name. All of
//! them are Layer 0 (no renderer or engine dependencies) and can be driven
//! from a viewer, a batch tool or a server.
//!
//! # Quick Start
//!
//! ```
//! use fit::prelude::*;
//!
//! let avatar = SceneNode::new("avatar")
//!     .with_mesh(box_mesh(Point3::new(-25.0, 0.0, -15.0), Point3::new(25.0, 180.0, 15.0)));
//! let jacket = SceneNode::new("jacket")
//!     .with_mesh(box_mesh(Point3::new(-0.3, 0.0, -0.2), Point3::new(0.3, 0.6, 0.2)))
//!     .with_material(MaterialSlot::single(Material::new("wool")));
//!
//! let mut scene = SceneManager::new(SessionConfig::default());
//! scene.load_avatar(avatar).unwrap();
//!
//! let report = scene.load_clothing(jacket).unwrap().unwrap();
//! assert_eq!(report.clothing_type, ClothingType::Jacket);
//!
//! scene.change_clothing_color("navy").unwrap();
//! scene.change_clothing_color("not-a-color").unwrap_err();
//! scene.change_clothing_color("#1f2a44").unwrap();
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Geometry primitives: `IndexedMesh`, `Vertex`, `Bounds3`, `Axis`
//! - [`scene`] - Scene graph: `SceneNode`, `NodeTransform`, materials and colors
//!
//! ## Fitting
//! - [`measure`] - Avatar bounds, key points and normalization
//! - [`garment`] - Garment classification and fitting
//!
//! ## Orchestration
//! - [`session`] - Load sequencing and presentation controls
//!
//! # Feature Flags
//!
//! - `serde` - Serialize parameter, report and state types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Geometry primitives: `IndexedMesh`, `Vertex`, `Bounds3`, `Axis`.
pub use mesh_types as types;

/// Scene graph nodes, transforms, materials and colors.
pub use mesh_scene as scene;

/// Avatar bounds, key points and normalization.
pub use fit_measure as measure;

/// Garment classification and fitting.
pub use fit_garment as garment;

/// Load sequencing and presentation controls.
pub use fit_session as session;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for garment fitting.
///
/// # Usage
///
/// ```
/// use fit::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use mesh_types::{Bounds3, IndexedMesh, MeshBounds, Point3, Vector3, box_mesh};

    // Scene graph
    pub use mesh_scene::{Color, Material, MaterialSlot, NodeTransform, SceneHandle, SceneNode};

    // Measurement
    pub use fit_measure::{AvatarData, analyze_avatar, normalize_avatar};

    // Fitting
    pub use fit_garment::{
        ClothingType, FitParams, FitReport, FitTransform, detect_clothing_type,
        fit_clothing_to_avatar, fit_in_place,
    };

    // Session
    pub use fit_session::{SceneManager, SessionConfig};
}

// =============================================================================
// Tests
// =============================================================================
