//! # Box Primitive
//!
//! The box primitive handed out by a scene.

use crate::mesh::Mesh;
use glam::DVec3;

/// Corner sign pattern per face, counter-clockwise seen from outside.
///
/// Corners are indexed by bits: bit 0 = +x, bit 1 = +y, bit 2 = +z.
const FACES: [[u32; 4]; 6] = [
    [0, 2, 3, 1], // -z
    [4, 5, 7, 6], // +z
    [0, 1, 5, 4], // -y
    [2, 6, 7, 3], // +y
    [0, 4, 6, 2], // -x
    [1, 3, 7, 5], // +x
];

/// Creates the primitive box the scene hands out: centered at the origin,
/// half-extent 1 on every axis (edge length 2).
///
/// An object scale applied to this box equals the box's half-extents.
///
/// # Example
///
/// ```rust
/// use window_mesh::primitives::unit_box;
/// use glam::DVec3;
///
/// let (min, max) = unit_box().bounding_box();
/// assert_eq!(min, DVec3::splat(-1.0));
/// assert_eq!(max, DVec3::ONE);
/// ```
pub fn unit_box() -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);

    for corner in 0..8u32 {
        let sign = DVec3::new(
            if corner & 1 == 0 { -1.0 } else { 1.0 },
            if corner & 2 == 0 { -1.0 } else { 1.0 },
            if corner & 4 == 0 { -1.0 } else { 1.0 },
        );
        mesh.add_vertex(sign);
    }

    for [a, b, c, d] in FACES {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    mesh
}
