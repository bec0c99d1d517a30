//! Automatic garment fitting.
//!
//! Classifies a garment from its bounding-box proportions and computes the
//! root scale and position that place it on the matching region of an
//! analyzed avatar.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no renderer or engine dependencies.
//!
//! # Algorithm
//!
//! 1. Measure the garment with its root transform reset to identity.
//! 2. Classify by height over width ([`classify_aspect_ratio`]), unless a
//!    type is forced through [`FitParams::clothing_type_override`].
//! 3. Look up the per-type scale and anchor point ([`FitProportions`]).
//! 4. Measure the garment at that scale and offset it so its bounds center
//!    sits on the anchor.
//!
//! | Type | Scale | Anchor |
//! |---|---|---|
//! | Fullbody | 95% / 90% / 95% of avatar | center, lowered 5% of avatar height |
//! | Jacket, Top | 102% girth, 40% of avatar height | chest, raised 10% of garment height |
//! | Pants | 100% girth, 50% of avatar height | waist, lowered 30% of garment height |
//! | Hat | uniform, 15% of avatar height | head, raised 20% of hat height |
//! | Default | uniform, 102% of the tightest ratio | center |
//!
//! # Quick Start
//!
//! ```
//! use fit_garment::{fit_in_place, ClothingType, FitParams};
//! use fit_measure::analyze_avatar;
//! use mesh_scene::SceneNode;
//! use mesh_types::{box_mesh, Point3};
//!
//! let avatar = SceneNode::new("avatar")
//!     .with_mesh(box_mesh(Point3::new(-0.5, -1.0, -0.25), Point3::new(0.5, 1.0, 0.25)));
//! let data = analyze_avatar(&avatar).unwrap();
//!
//! let mut pants = SceneNode::new("pants")
//!     .with_mesh(box_mesh(Point3::new(-40.0, 0.0, -15.0), Point3::new(40.0, 30.0, 15.0)));
//!
//! let report = fit_in_place(&mut pants, &data, &FitParams::default()).unwrap();
//! assert_eq!(report.clothing_type, ClothingType::Pants);
//!
//! let center = pants.world_bounds().center();
//! assert!((center.y - report.target_position.y).abs() < 1e-9);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod error;
mod fit;
mod params;
mod result;

pub use classify::{
    ClassificationThresholds, ClothingType, aspect_ratio, classify_aspect_ratio,
    detect_clothing_type, detect_clothing_type_with,
};
pub use error::{FitError, FitResult, ParseClothingTypeError};
pub use fit::{apply_fit, fit_clothing, fit_clothing_to_avatar, fit_in_place};
pub use params::{FitParams, FitProportions, ZeroWidthPolicy};
pub use result::{FitReport, FitTransform};
