//! # Extrusion Operations
//!
//! Turns closed 2D profiles into solids:
//! - **linear_extrude**: Sweep a profile straight along Z, with optional caps

mod linear;


pub use linear::{linear_extrude, LinearExtrudeParams};

use crate::triangulation::signed_area;
use glam::DVec2;

/// A closed 2D profile for extrusion operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Boundary vertices, any orientation
    pub outer: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a new polygon from boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let square = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self { outer }
    }

    /// Creates an axis-aligned rectangle.
    pub fn rectangle(min: DVec2, max: DVec2) -> Self {
        Self::new(vec![
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ])
    }

    /// Returns the number of boundary vertices.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if the boundary runs counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        signed_area(&self.outer) > 0.0
    }

    /// Returns a copy wound counter-clockwise.
    pub fn to_ccw(&self) -> Self {
        let mut outer = self.outer.clone();
        if !self.is_ccw() {
            outer.reverse();
        }
        Self { outer }
    }
}
