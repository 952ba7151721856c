//! # Curve Data
//!
//! 2D Bezier curve objects and their conversion to solid meshes.
//!
//! Curves live in their local XY plane. Conversion follows the usual DCC
//! rules: closed splines are filled, the fill is extruded by `extrude` on
//! each side of the plane, and the result is a plain triangle mesh.

mod bezier;

#[cfg(test)]
mod tests;

pub use bezier::{BezierPoint, BezierSpline, HandleType};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
use crate::triangulation::triangulate_polygon;
use config::constants::CURVE_RESOLUTION_U;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which faces of an extruded curve get filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Front (+Z) and back (-Z) caps
    Both,
    /// Front cap only
    Front,
    /// Back cap only
    Back,
    /// Side walls only
    None,
}

/// A 2D curve object: splines plus extrusion settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    pub splines: Vec<BezierSpline>,
    pub fill_mode: FillMode,
    /// Half the extrusion thickness along local Z
    pub extrude: f64,
    /// Round bevel radius; only zero is supported
    pub bevel_depth: f64,
    /// Samples per curved segment
    pub resolution_u: u32,
}

impl Default for CurveData {
    fn default() -> Self {
        Self {
            splines: Vec::new(),
            fill_mode: FillMode::Both,
            extrude: 0.0,
            bevel_depth: 0.0,
            resolution_u: CURVE_RESOLUTION_U,
        }
    }
}

impl CurveData {
    /// Creates empty curve data with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a spline.
    pub fn add_spline(&mut self, spline: BezierSpline) {
        self.splines.push(spline);
    }

    /// Converts the curve into a triangle mesh in curve-local space.
    ///
    /// With `extrude > 0` every closed spline becomes a solid spanning
    /// `[-extrude, extrude]` along Z. With `extrude == 0` closed splines
    /// become flat filled faces.
    ///
    /// # Errors
    ///
    /// - `Unsupported` for a non-zero bevel or an open spline
    /// - `DegenerateGeometry` for a negative extrusion or a spline with
    ///   fewer than three distinct samples
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        if self.bevel_depth != 0.0 {
            return Err(MeshError::unsupported("curve bevel is not supported"));
        }
        if !(self.extrude.is_finite() && self.extrude >= 0.0) {
            return Err(MeshError::degenerate(format!(
                "curve extrusion must be non-negative: {}",
                self.extrude
            )));
        }

        let mut mesh = Mesh::new();

        for spline in &self.splines {
            if !spline.is_cyclic() {
                return Err(MeshError::unsupported(
                    "open splines need a bevel to produce geometry",
                ));
            }

            let profile = Polygon2D::new(spline.tessellate(self.resolution_u));
            if profile.vertex_count() < 3 {
                return Err(MeshError::degenerate(
                    "closed spline needs at least 3 samples",
                ));
            }

            let solid = if self.extrude > 0.0 {
                self.extrude_profile(&profile)?
            } else {
                self.fill_profile(&profile)?
            };

            debug!(
                samples = profile.vertex_count(),
                triangles = solid.triangle_count(),
                "converted spline"
            );
            mesh.merge(&solid);
        }

        Ok(mesh)
    }

    fn extrude_profile(&self, profile: &Polygon2D) -> Result<Mesh, MeshError> {
        let params = LinearExtrudeParams {
            height: self.extrude * 2.0,
            center: true,
            cap_bottom: matches!(self.fill_mode, FillMode::Both | FillMode::Back),
            cap_top: matches!(self.fill_mode, FillMode::Both | FillMode::Front),
        };
        linear_extrude(profile, &params)
    }

    fn fill_profile(&self, profile: &Polygon2D) -> Result<Mesh, MeshError> {
        let mut mesh = Mesh::new();
        if self.fill_mode == FillMode::None {
            return Ok(mesh);
        }

        let profile = profile.to_ccw();
        for v in &profile.outer {
            mesh.add_vertex(DVec3::new(v.x, v.y, 0.0));
        }
        for [a, b, c] in triangulate_polygon(&profile.outer)? {
            mesh.add_triangle(a as u32, b as u32, c as u32);
        }
        Ok(mesh)
    }
}
