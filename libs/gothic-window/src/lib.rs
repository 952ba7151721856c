//! # Gothic Window
//!
//! Procedural gothic window built inside a host scene: a pointed stone arch,
//! an inset glass panel and a set of mullion and tracery bars merged into the
//! frame.
//!
//! ## Architecture
//!
//! ```text
//! WindowParameters
//!     → assembly::build_gothic_window
//!         → arch::build_arch        (frame)
//!         → panel::build_panel      (glass, via build_arch)
//!         → mullion::layout + instantiate
//!         → MaterialCache::ensure + Scene::join_selected
//!     → WindowAssembly (value snapshots)
//! ```
//!
//! The host is abstracted by the [`Scene`] trait; [`InMemoryScene`] is a
//! complete in-process implementation.
//!
//! ## Usage
//!
//! ```rust
//! use gothic_window::{build_gothic_window, InMemoryScene, MaterialCache, WindowParameters};
//!
//! let mut scene = InMemoryScene::with_startup_objects();
//! let mut materials = MaterialCache::new();
//! let params = WindowParameters::new(2.0, 3.0, 0.2, 0.15);
//!
//! let window = build_gothic_window(&mut scene, &mut materials, &params).unwrap();
//! let (min, max) = window.frame.world_bounds();
//! assert!((max.z - 3.0).abs() < 1e-9);
//! assert!((min.x + 1.0).abs() < 1e-9);
//! ```

pub mod arch;
pub mod assembly;
pub mod error;
pub mod material;
pub mod mullion;
pub mod panel;
pub mod params;
pub mod scene;

pub use assembly::{build_gothic_window, clear_meshes, MeshSnapshot, WindowAssembly};
pub use error::WindowError;
pub use material::{MaterialCache, MaterialId, MaterialSpec};
pub use params::{ArchParameters, WindowParameters};
pub use scene::{InMemoryScene, Scene};
