//! # Window Mesh
//!
//! Host-independent geometry for the gothic window generator: Bezier curve
//! profiles, their conversion into extruded solids, box primitives and the
//! triangle mesh container everything ends up in.
//!
//! ## Architecture
//!
//! ```text
//! BezierSpline → CurveData::to_mesh → linear_extrude (+ ear-clipped caps) → Mesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use window_mesh::curve::{BezierPoint, BezierSpline, CurveData, HandleType};
//! use glam::DVec2;
//!
//! let mut curve = CurveData { extrude: 0.1, ..CurveData::new() };
//! curve.add_spline(BezierSpline::new(
//!     vec![
//!         BezierPoint::new(DVec2::new(0.0, 0.0), HandleType::Vector),
//!         BezierPoint::new(DVec2::new(1.0, 0.0), HandleType::Vector),
//!         BezierPoint::new(DVec2::new(0.0, 1.0), HandleType::Vector),
//!     ],
//!     true,
//! ));
//! let mesh = curve.to_mesh().unwrap();
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.triangle_count(), 8);
//! ```

pub mod curve;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod triangulation;

pub use curve::CurveData;
pub use error::MeshError;
pub use mesh::Mesh;
