//! # Triangle Mesh
//!
//! Indexed triangle storage with a material slot per face.

use config::constants::SLIVER_RATIO;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh.
///
/// Each face records which material slot of its owning object it uses, so
/// joining objects with different materials keeps every face's look. Newly
/// generated geometry uses slot 0.
///
/// # Example
///
/// ```rust
/// use window_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// let c = mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(a, b, c);
/// assert_eq!(mesh.material_indices(), &[0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// Parallel to `triangles`
    material_indices: Vec<u16>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given counts.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            material_indices: Vec::with_capacity(triangle_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex, returning its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a counter-clockwise face on material slot 0.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.add_triangle_with_material(v0, v1, v2, 0);
    }

    pub fn add_triangle_with_material(&mut self, v0: u32, v1: u32, v2: u32, slot: u16) {
        self.triangles.push([v0, v1, v2]);
        self.material_indices.push(slot);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Material slot of every face.
    #[inline]
    pub fn material_indices(&self) -> &[u16] {
        &self.material_indices
    }

    /// Position of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Axis-aligned bounds as (min, max); zero vectors when empty.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Applies an affine transform to every vertex.
    ///
    /// A mirroring matrix (negative determinant) also reverses each face so
    /// normals keep pointing outward.
    pub fn transform(&mut self, matrix: &DMat4) {
        self.vertices
            .iter_mut()
            .for_each(|v| *v = matrix.transform_point3(*v));

        if matrix.determinant() < 0.0 {
            self.triangles.iter_mut().for_each(|tri| tri.swap(1, 2));
        }
    }

    /// Appends `other`, keeping its slot indices.
    pub fn merge(&mut self, other: &Mesh) {
        self.merge_with_slots(other, |slot| slot);
    }

    /// Appends `other`, passing each of its slot indices through `remap`.
    pub fn merge_with_slots(&mut self, other: &Mesh, remap: impl Fn(u16) -> u16) {
        let base = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles
            .extend(other.triangles.iter().map(|tri| tri.map(|i| i + base)));
        self.material_indices
            .extend(other.material_indices.iter().map(|slot| remap(*slot)));
    }

    /// True when every face indexes real vertices, has a slot and is not a
    /// sliver (see [`is_sliver`]).
    pub fn validate(&self) -> bool {
        if self.material_indices.len() != self.triangles.len() {
            return false;
        }

        let count = self.vertices.len();
        self.triangles.iter().all(|tri| {
            if tri.iter().any(|i| *i as usize >= count) {
                return false;
            }
            let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
            !is_sliver(a, b, c)
        })
    }
}

/// True when a triangle is collinear or nearly so.
///
/// The doubled area is compared with the longest squared edge, so the test
/// does not depend on the size of the triangle.
///
/// # Example
///
/// ```rust
/// use window_mesh::mesh::is_sliver;
/// use glam::DVec3;
///
/// assert!(!is_sliver(DVec3::ZERO, DVec3::X * 1e-6, DVec3::Y * 1e-6));
/// assert!(is_sliver(DVec3::ZERO, DVec3::X, DVec3::X * 2.0));
/// ```
pub fn is_sliver(a: DVec3, b: DVec3, c: DVec3) -> bool {
    let longest = (b - a)
        .length_squared()
        .max((c - b).length_squared())
        .max((a - c).length_squared());
    if longest == 0.0 {
        return true;
    }
    (b - a).cross(c - a).length() < SLIVER_RATIO * longest
}
