//! Session orchestration for garment fitting.
//!
//! A [`SceneManager`] owns the avatar and the garment a host is showing,
//! sequences their loads, and exposes the presentation controls:
//!
//! - `load_avatar` - normalize, analyze, refit any installed garment
//! - `begin_clothing_load` / `finish_clothing_load` - last load wins
//! - `toggle_clothing_visibility`, `change_clothing_color`, `clear_scene`
//!
//! The manager is a plain owned value. It performs no I/O: the host decodes
//! model files into [`mesh_scene::SceneNode`] trees and hands them over.
//!
//! # Stale Loads
//!
//! Clothing loads are asynchronous on most hosts. Each load takes a
//! [`LoadTicket`] up front; when it finishes, only the newest ticket is
//! accepted, so a slow download can never replace a garment the user chose
//! after it.
//!
//! ```
//! use fit_session::{SceneManager, SessionError};
//! use mesh_scene::SceneNode;
//! use mesh_types::{box_mesh, Point3};
//!
//! let mut scene = SceneManager::default();
//! let garment = || {
//!     SceneNode::new("shirt")
//!         .with_mesh(box_mesh(Point3::new(-0.5, 0.0, -0.2), Point3::new(0.5, 0.6, 0.2)))
//! };
//!
//! let first = scene.begin_clothing_load();
//! let second = scene.begin_clothing_load();
//!
//! scene.finish_clothing_load(second, garment()).unwrap();
//! let late = scene.finish_clothing_load(first, garment());
//! assert!(matches!(late, Err(SessionError::StaleLoad { .. })));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod manager;
mod state;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use manager::{LoadTicket, SceneManager};
pub use state::SceneState;
