//! # Arch Profile
//!
//! Pointed-arch outline and the extruded arch solid built from it.
//!
//! The outline is a closed five point Bezier loop drawn in the curve's local
//! XY plane:
//!
//! ```text
//!            tip (0, h)
//!           /         \
//! shoulder (-w, s)   shoulder (w, s)
//!          |             |
//!  base (-w, 0) ------- base (w, 0)
//! ```
//!
//! with `w = width / 2` and `s = 0.62 * height`. Corners and the tip use
//! vector handles; the shoulders use auto-clamped handles, which keeps the
//! jambs vertical and every segment inside the box of its end points.

use crate::error::{require_positive, WindowError};
use crate::params::ArchParameters;
use crate::scene::{ObjectData, ObjectId, Scene};
use config::constants::{shoulder_height, ARCH_OBJECT_NAME};
use glam::{DVec2, DVec3};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, instrument};
use window_mesh::curve::{BezierPoint, BezierSpline, CurveData, FillMode, HandleType};

const HANDLE_TYPES: [HandleType; 5] = [
    HandleType::Vector,
    HandleType::AutoClamped,
    HandleType::Vector,
    HandleType::AutoClamped,
    HandleType::Vector,
];

/// Control points of a pointed arch.
///
/// # Examples
/// ```
/// use gothic_window::arch::ArchProfile;
/// use glam::DVec3;
///
/// let profile = ArchProfile::new(2.0, 3.0).unwrap();
/// assert_eq!(profile.tip(), DVec3::new(0.0, 0.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchProfile {
    width: f64,
    height: f64,
    points: [DVec2; 5],
}

impl ArchProfile {
    pub fn new(width: f64, height: f64) -> Result<Self, WindowError> {
        require_positive("width", width)?;
        require_positive("height", height)?;

        let w = width / 2.0;
        let s = shoulder_height(height);
        Ok(Self {
            width,
            height,
            points: [
                DVec2::new(-w, 0.0),
                DVec2::new(-w, s),
                DVec2::new(0.0, height),
                DVec2::new(w, s),
                DVec2::new(w, 0.0),
            ],
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Outline points in the curve plane, left base first.
    pub fn outline(&self) -> &[DVec2; 5] {
        &self.points
    }

    /// Control points once the arch stands upright in the x-z plane.
    pub fn control_points(&self) -> [DVec3; 5] {
        self.points.map(|p| DVec3::new(p.x, 0.0, p.y))
    }

    pub fn tip(&self) -> DVec3 {
        self.control_points()[2]
    }

    pub fn shoulder_height(&self) -> f64 {
        self.points[1].y
    }

    /// Closed spline through the control points.
    pub fn spline(&self) -> BezierSpline {
        let points = self
            .points
            .iter()
            .zip(HANDLE_TYPES)
            .map(|(co, handle_type)| BezierPoint::new(*co, handle_type))
            .collect();
        BezierSpline::new(points, true)
    }

    /// Curve data extruded `depth / 2` to each side of the profile plane.
    pub fn to_curve(&self, depth: f64) -> CurveData {
        let mut curve = CurveData {
            fill_mode: FillMode::Both,
            extrude: depth / 2.0,
            bevel_depth: 0.0,
            ..CurveData::new()
        };
        curve.add_spline(self.spline());
        curve
    }
}

/// Builds an upright arch solid and links it into the scene.
///
/// The curve is converted to a mesh and its upright rotation is baked in,
/// so the returned object has identity rotation and scale and sits at
/// `params.location`.
///
/// # Errors
///
/// `InvalidParameter` for a non-positive dimension; the scene is untouched
/// in that case.
#[instrument(skip(scene))]
pub fn build_arch<S: Scene>(scene: &mut S, params: &ArchParameters) -> Result<ObjectId, WindowError> {
    params.validate()?;
    let profile = ArchProfile::new(params.width, params.height)?;

    let id = scene.link(ARCH_OBJECT_NAME, ObjectData::Curve(profile.to_curve(params.depth)));
    {
        let object = scene.get_mut(id)?;
        object.transform.location = params.location;
        object.transform.rotation = DVec3::new(FRAC_PI_2, 0.0, 0.0);
    }
    scene.convert_to_mesh(id)?;
    scene.apply_rotation_scale(id)?;

    let object = scene.get(id)?;
    debug!(
        name = %object.name,
        triangles = object.mesh().map_or(0, |mesh| mesh.triangle_count()),
        "built arch"
    );
    Ok(id)
}
