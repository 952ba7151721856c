//! # Linear Extrusion
//!
//! Extrudes a closed 2D profile along the Z axis to create a solid.
//!
//! - `height`: Extrusion distance along Z
//! - `center`: If true, the solid spans `[-height/2, height/2]`
//! - `cap_bottom` / `cap_top`: Fill the start and end faces

use super::Polygon2D;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::triangulation::triangulate_polygon;
use glam::DVec3;

/// Parameters for linear extrusion.
#[derive(Debug, Clone)]
pub struct LinearExtrudeParams {
    /// Extrusion height along Z axis
    pub height: f64,
    /// Center the extrusion around Z=0
    pub center: bool,
    /// Fill the face at the lower Z
    pub cap_bottom: bool,
    /// Fill the face at the upper Z
    pub cap_top: bool,
}

impl Default for LinearExtrudeParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            center: false,
            cap_bottom: true,
            cap_top: true,
        }
    }
}

/// Extrudes a 2D polygon along the Z axis.
///
/// The profile is rewound counter-clockwise first, so side walls and caps
/// face outward whatever the input orientation.
///
/// # Example
///
/// ```rust
/// use window_mesh::ops::extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
/// use glam::DVec2;
///
/// let square = Polygon2D::rectangle(DVec2::ZERO, DVec2::splat(10.0));
/// let params = LinearExtrudeParams {
///     height: 20.0,
///     ..Default::default()
/// };
/// let mesh = linear_extrude(&square, &params).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, params: &LinearExtrudeParams) -> Result<Mesh, MeshError> {
    if !(params.height.is_finite() && params.height > 0.0) {
        return Err(MeshError::degenerate(
            "linear_extrude height must be positive",
        ));
    }

    if polygon.vertex_count() < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
        ));
    }

    let profile = polygon.to_ccw();
    let n = profile.vertex_count();
    let z0 = if params.center { -params.height / 2.0 } else { 0.0 };
    let z1 = z0 + params.height;

    let mut mesh = Mesh::with_capacity(n * 2, n * 4);

    for z in [z0, z1] {
        for v in &profile.outer {
            mesh.add_vertex(DVec3::new(v.x, v.y, z));
        }
    }

    // Side walls, one quad per boundary edge
    for i in 0..n {
        let j = (i + 1) % n;
        let (b0, b1) = (i as u32, j as u32);
        let (t0, t1) = ((n + i) as u32, (n + j) as u32);
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    if params.cap_bottom || params.cap_top {
        let caps = triangulate_polygon(&profile.outer)?;
        let top = n as u32;

        for [a, b, c] in caps {
            let (a, b, c) = (a as u32, b as u32, c as u32);
            if params.cap_bottom {
                mesh.add_triangle(a, c, b);
            }
            if params.cap_top {
                mesh.add_triangle(top + a, top + b, top + c);
            }
        }
    }

    Ok(mesh)
}
