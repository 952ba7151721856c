//! # Primitives
//!
//! Mesh generation for primitive solids.

pub mod cube;

pub use cube::unit_box;
