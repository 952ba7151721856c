//! # Mesh Operations
//!
//! Operations that build solids from 2D profiles.

pub mod extrude;

pub use extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
